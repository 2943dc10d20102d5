use crate::{ChallengeError, ChallengeResult, WindowLayout};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_HIGHLIGHT_THEME: &str = "base16-ocean.dark";
const DEFAULT_COPIED_FEEDBACK_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Tabs,
    Split,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub default_view_mode: Option<ViewMode>,
    #[serde(default)]
    pub highlight_theme: Option<String>,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub copied_feedback_ms: Option<u64>,
    #[serde(default)]
    pub virtual_list: VirtualListConfig,
    #[serde(default)]
    pub debounce: DebounceConfig,
}

/// Layout of the virtual list demo, in pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualListConfig {
    pub item_height: f64,
    pub viewport_height: f64,
    pub buffer: usize,
    pub item_count: usize,
}

impl Default for VirtualListConfig {
    fn default() -> Self {
        Self {
            item_height: 60.0,
            viewport_height: 300.0,
            buffer: 3,
            item_count: 10_000,
        }
    }
}

impl VirtualListConfig {
    pub fn layout(&self) -> ChallengeResult<WindowLayout> {
        WindowLayout::new(self.item_height, self.viewport_height, self.buffer)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    pub delay_ms: u64,
    pub search_latency_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            search_latency_ms: 300,
        }
    }
}

impl DebounceConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn search_latency(&self) -> Duration {
        Duration::from_millis(self.search_latency_ms)
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/frontend-challenges/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("frontend-challenges/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("frontend-challenges\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults when it is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring config {}: {}", config_path.display(), e);
                    }
                }
            }
        }
        Self::default()
    }

    /// Load from an explicit path, reporting every failure.
    pub fn load_from(path: &Path) -> ChallengeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> ChallengeResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ChallengeError::Config(e.to_string()))?;
        config.virtual_list.layout()?;
        Ok(config)
    }

    pub fn effective_view_mode(&self) -> ViewMode {
        self.default_view_mode.unwrap_or_default()
    }

    pub fn effective_highlight_theme(&self) -> &str {
        self.highlight_theme
            .as_deref()
            .unwrap_or(DEFAULT_HIGHLIGHT_THEME)
    }

    pub fn copied_feedback(&self) -> Duration {
        Duration::from_millis(
            self.copied_feedback_ms
                .unwrap_or(DEFAULT_COPIED_FEEDBACK_MS),
        )
    }
}
