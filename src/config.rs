//! User configuration: submission timings and log filter.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for [`Config`].
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings read from `<config dir>/enquiry/config.json`.
///
/// Every key is optional; absent keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated round-trip of the contact form, in milliseconds.
    pub contact_delay_ms: u64,
    /// Simulated round-trip of the service-request form, in milliseconds.
    pub service_delay_ms: u64,
    /// How long the submit control stays disabled after a submission settles.
    pub restore_delay_ms: u64,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contact_delay_ms: 2000,
            service_delay_ms: 1500,
            restore_delay_ms: 1000,
            log_filter: "enquiry=info".to_string(),
        }
    }
}

impl Config {
    /// Returns the config file path, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("enquiry").join("config.json"))
    }

    /// Loads the user's config, falling back to defaults when there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.contact_delay_ms)
    }

    pub fn service_delay(&self) -> Duration {
        Duration::from_millis(self.service_delay_ms)
    }

    pub fn restore_delay(&self) -> Duration {
        Duration::from_millis(self.restore_delay_ms)
    }
}
