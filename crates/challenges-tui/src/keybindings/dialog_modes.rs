use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct SelectorProvider;

impl KeybindingProvider for SelectorProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Select Challenge",
            vec![
                Keybinding::new("j/k", "navigate", "Move through challenges"),
                Keybinding::new("enter", "select", "Open the highlighted challenge"),
                Keybinding::new("esc", "cancel", "Close without changing"),
            ],
        )
    }
}
