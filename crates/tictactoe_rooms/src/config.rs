//! Room configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::INITIAL_CLOCK_SECS;
use tracing::{debug, info, instrument};

/// Settings for new rooms and logging.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RoomsConfig {
    /// Seconds on each clock when a game starts.
    #[serde(default = "default_initial_clock_secs")]
    initial_clock_secs: u32,

    /// Whether created rooms are hidden from the open-room listing.
    #[serde(default)]
    private_by_default: bool,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_initial_clock_secs() -> u32 {
    INITIAL_CLOCK_SECS
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for RoomsConfig {
    fn default() -> Self {
        Self {
            initial_clock_secs: default_initial_clock_secs(),
            private_by_default: false,
            log_filter: default_log_filter(),
        }
    }
}

impl RoomsConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            initial_clock_secs = config.initial_clock_secs,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.initial_clock_secs == 0 {
            return Err(ConfigError::new(
                "initial_clock_secs must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
