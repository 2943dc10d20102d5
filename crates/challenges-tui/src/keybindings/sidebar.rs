use super::{global_bindings, Keybinding, KeybindingContext, KeybindingProvider};

pub struct SidebarProvider;

impl KeybindingProvider for SidebarProvider {
    fn get_context(&self) -> KeybindingContext {
        let mut bindings = vec![
            Keybinding::new("j/k", "navigate", "Move between domains and subcategories"),
            Keybinding::new(
                "enter",
                "open",
                "Expand or collapse a domain, or open a subcategory",
            ),
        ];
        bindings.extend(global_bindings());
        KeybindingContext::new("Sidebar", bindings)
    }
}
