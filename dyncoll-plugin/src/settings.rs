//! Plugin settings, read from the `[plugin]` table of `dyncoll.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_COLLECTION_PATH: &str = "./dynamicCollections.json";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSettings {
    /// When false the snapshot is read and logged but nothing is installed.
    #[serde(default)]
    pub enabled: bool,
    /// Where the snapshot for the next start is stored.
    #[serde(default = "default_collection_path")]
    pub collection_path: PathBuf,
    /// How often the rollout watcher compares versions.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_collection_path() -> PathBuf {
    PathBuf::from(DEFAULT_COLLECTION_PATH)
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            collection_path: default_collection_path(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    plugin: PluginSettings,
}

impl PluginSettings {
    /// Loads settings from `path`, falling back to defaults when the file is
    /// missing, unreadable, or malformed.
    pub fn load_from(path: PathBuf) -> Self {
        if !path.exists() {
            info!("No settings file found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<SettingsFile>(&contents) {
                Ok(file) => {
                    info!("Loaded dynamic collections settings from {:?}", path);
                    file.plugin
                }
                Err(e) => {
                    warn!(
                        "Failed to parse settings file {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}
