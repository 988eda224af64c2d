//! Configuration for the qboard CLI.
//!
//! Settings come from, highest precedence first:
//! 1. Command-line flags
//! 2. Environment variables (`QBOARD_` prefix)
//! 3. The configuration file (YAML, default `~/.qboard/config.yaml`)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use qboard_adapter_http::{DEFAULT_ENDPOINT, ENDPOINT_ENV};
use qboard_hal::BackendConfig;
use qboard_state::DisplayMode;

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Simulation service settings
    #[serde(default)]
    pub simulator: SimulatorConfig,

    /// Chart settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Simulation service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Simulate endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Chart settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Quantity shown per basis state
    #[serde(default)]
    pub mode: DisplayMode,

    /// Show zero-valued basis states
    #[serde(default)]
    pub show_zero: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        SimulatorConfig {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.as_ref().display())))?;

        let config: Config = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load configuration with file, then environment overrides.
    ///
    /// An explicit path must exist. Without one, the default file is read
    /// when present and skipped otherwise.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ => Config::default(),
            },
        };

        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge environment variables into this configuration.
    fn merge_env(self) -> Self {
        self.merge_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`. Keys that are absent or fail to parse
    /// leave the field unchanged.
    fn merge_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup(ENDPOINT_ENV) {
            self.simulator.endpoint = v;
        }
        if let Some(v) = lookup("QBOARD_TIMEOUT") {
            if let Ok(val) = v.parse() {
                self.simulator.timeout_seconds = val;
            }
        }
        if let Some(v) = lookup("QBOARD_DISPLAY_MODE") {
            if let Ok(mode) = v.parse() {
                self.display.mode = mode;
            }
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.simulator.endpoint;
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid simulator endpoint: {endpoint}"
            )));
        }

        if self.simulator.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Backend settings for the HTTP simulator.
    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig::new("http")
            .with_endpoint(&self.simulator.endpoint)
            .with_timeout_secs(self.simulator.timeout_seconds)
    }
}

/// Return the default configuration file path (`~/.qboard/config.yaml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".qboard").join("config.yaml"))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
