pub mod content;
pub mod demo;
pub mod dialog_modes;
pub mod registry;
pub mod sidebar;

pub use registry::KeybindingRegistry;

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: String,
    pub short_description: String,
    pub description: String,
}

impl Keybinding {
    pub fn new(
        key: impl Into<String>,
        short_description: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            short_description: short_description.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingContext {
    pub name: String,
    pub bindings: Vec<Keybinding>,
}

impl KeybindingContext {
    pub fn new(name: impl Into<String>, bindings: Vec<Keybinding>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }

    /// `key: short` pairs joined for the footer.
    pub fn footer_hint(&self) -> String {
        self.bindings
            .iter()
            .map(|b| format!("{}: {}", b.key, b.short_description))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

pub trait KeybindingProvider {
    fn get_context(&self) -> KeybindingContext;
}

/// Bindings available from every panel in normal mode.
pub(crate) fn global_bindings() -> Vec<Keybinding> {
    vec![
        Keybinding::new("?", "help", "Show help"),
        Keybinding::new("q", "quit", "Quit application"),
        Keybinding::new("1/2/3", "focus", "Focus sidebar, code or demo"),
        Keybinding::new("s", "select", "Pick a challenge in the current subcategory"),
        Keybinding::new("n", "next", "Go to the next challenge"),
        Keybinding::new("v", "view", "Toggle tabs and split view"),
        Keybinding::new("t", "tab", "Switch between code and preview tab"),
        Keybinding::new("c", "copy", "Copy solution code to the clipboard"),
    ]
}
