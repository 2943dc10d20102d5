use super::{global_bindings, Keybinding, KeybindingContext, KeybindingProvider};

pub struct ContentProvider;

impl KeybindingProvider for ContentProvider {
    fn get_context(&self) -> KeybindingContext {
        let mut bindings = vec![
            Keybinding::new("j/k", "scroll", "Scroll the solution code"),
            Keybinding::new("g/G", "top/bottom", "Jump to the first or last line"),
        ];
        bindings.extend(global_bindings());
        KeybindingContext::new("Challenge", bindings)
    }
}
