use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Terminal UI timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle time after the last search keystroke before the list updates (default: 300).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Where recipes come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The builtin catalog is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Where favorites and logs are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key-value storage file (default: `<data_dir>/recipe-deck/storage.json`).
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Log file used while the TUI owns the terminal
    /// (default: `<data_dir>/recipe-deck/recipe-deck.log`).
    #[serde(default)]
    pub log_path: Option<PathBuf>,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
