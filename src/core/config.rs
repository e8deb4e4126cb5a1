//! Application configuration for the external removal service.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const CONFIG_FILENAME: &str = "config.toml";

/// Settings for reaching the background-removal service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Endpoint the image bytes are posted to
    pub removal_endpoint: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            removal_endpoint: "http://localhost:8000/remove-bg/".to_string(),
            request_timeout_secs: 60,
        }
    }
}

impl AppConfig {
    /// Loads `config.toml` from `dir`, writing the defaults on first run.
    ///
    /// An unparsable file falls back to the defaults with a warning rather
    /// than failing startup.
    pub fn load_or_create(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(CONFIG_FILENAME);

        if !path.exists() {
            let config = Self::default();
            fs::write(&path, toml::to_string_pretty(&config)?)?;
            info!("Wrote default config to {}", path.display());
            return Ok(config);
        }

        let contents = fs::read_to_string(&path)?;
        match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Config file {} is invalid ({e}), using defaults", path.display());
                Ok(Self::default())
            }
        }
    }
}
