pub mod config;
pub mod cursor;
pub mod debounce;
pub mod error;
pub mod input;
pub mod result;
pub mod window;

pub use config::{AppConfig, DebounceConfig, ViewMode, VirtualListConfig};
pub use cursor::Cursor;
pub use debounce::Debouncer;
pub use error::ChallengeError;
pub use input::TextInput;
pub use result::ChallengeResult;
pub use window::{compute_window, Window, WindowLayout};
