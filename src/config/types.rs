use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Storage location settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the platform data directory holding `favorites.json` and
    /// the log file.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Display timing settings, all in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Quote-swap fade window during which further draws are dropped
    /// (default: 800).
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// How long a toast stays on screen (default: 3000).
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    /// Event-loop tick interval (default: 100).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_transition_ms() -> u64 {
    800
}

fn default_toast_ms() -> u64 {
    3000
}

fn default_tick_ms() -> u64 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            toast_ms: default_toast_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Config {
    /// Effective data directory: the configured override, or the platform
    /// data directory joined with `quoterm`.
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("quoterm")
        })
    }
}
