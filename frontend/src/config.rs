use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Local storage key holding the JSON console config
pub const CONFIG_KEY: &str = "studio-console.config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Shown in the header
    pub business_name: String,
    /// One of trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            business_name: "Studio Console".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Reads the config from local storage. A missing key is not an error.
    pub fn load() -> Result<Self, StorageError> {
        match LocalStorage::get::<ConsoleConfig>(CONFIG_KEY) {
            Ok(config) => Ok(config),
            Err(StorageError::KeyNotFound(_)) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn max_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
