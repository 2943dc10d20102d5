pub mod app;
pub mod clipboard;
pub mod components;
pub mod demos;
pub mod dialog;
pub mod events;
pub mod highlight;
pub mod keybindings;
pub mod markdown;
pub mod sidebar;
pub mod theme;
pub mod ui;

pub use app::{App, AppMode, ContentTab, Focus};
