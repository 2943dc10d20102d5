use super::{Keybinding, KeybindingContext, KeybindingProvider};
use challenges_domain::DemoKind;

pub struct DemoProvider {
    kind: DemoKind,
}

impl DemoProvider {
    pub fn new(kind: DemoKind) -> Self {
        Self { kind }
    }
}

impl KeybindingProvider for DemoProvider {
    fn get_context(&self) -> KeybindingContext {
        let (name, mut bindings) = match self.kind {
            DemoKind::VirtualList => (
                "Demo - Virtual List",
                vec![
                    Keybinding::new("j/k", "scroll", "Scroll by 20px"),
                    Keybinding::new("PgUp/PgDn", "page", "Scroll by one viewport"),
                    Keybinding::new("g/G", "top/bottom", "Jump to the first or last item"),
                ],
            ),
            DemoKind::UseDebounce => (
                "Demo - Debounced Search",
                vec![Keybinding::new("type", "search", "Edit the search term")],
            ),
            DemoKind::NestedComments => (
                "Demo - Nested Comments",
                vec![
                    Keybinding::new("j/k", "navigate", "Move between comments"),
                    Keybinding::new("enter", "toggle", "Show or hide replies"),
                ],
            ),
        };
        bindings.push(Keybinding::new("esc", "leave", "Return focus to the code"));
        KeybindingContext::new(name, bindings)
    }
}
