//! Configuration System
//!
//! TOML file plus environment variable overrides. The command line's
//! `--api-url` is applied last by the binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::gateway::GatewayConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Defaults with environment variable overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Default config file locations, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("spendboard").join("config.toml")),
            Some(PathBuf::from("/etc/spendboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from the first readable default location, else environment only
    ///
    /// Nothing is logged here: this runs before the subscriber is installed,
    /// so the caller reports the outcome with [`DefaultLoad::log`].
    pub fn load_default() -> DefaultLoad {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first existing file of `paths`; unreadable files are skipped
    pub fn load_first(paths: &[PathBuf]) -> DefaultLoad {
        let mut errors = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return DefaultLoad {
                        config,
                        source: Some(path.clone()),
                        errors,
                    }
                }
                Err(e) => errors.push(e),
            }
        }

        DefaultLoad {
            config: Self::from_env(),
            source: None,
            errors,
        }
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Gateway overrides
        if let Some(url) = lookup("SPENDBOARD_API_URL") {
            self.gateway.base_url = url;
        }
        if let Some(timeout) = lookup("SPENDBOARD_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => self.gateway.request_timeout_secs = secs,
                Err(_) => tracing::warn!(value = %timeout, "Ignoring invalid SPENDBOARD_TIMEOUT_SECS"),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("SPENDBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SPENDBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of searching the default config locations
#[derive(Debug)]
pub struct DefaultLoad {
    pub config: Config,
    /// File the config came from, `None` for environment only
    pub source: Option<PathBuf>,
    /// Files that existed but failed to load
    pub errors: Vec<ConfigError>,
}

impl DefaultLoad {
    /// Report skipped files and the chosen source
    pub fn log(&self) {
        for error in &self.errors {
            tracing::warn!(error = %error, "Failed to load config");
        }
        match &self.source {
            Some(path) => tracing::info!(path = %path.display(), "Loaded config"),
            None => tracing::debug!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Spendboard Configuration
#
# Environment variables override these settings:
# - SPENDBOARD_API_URL
# - SPENDBOARD_TIMEOUT_SECS
# - SPENDBOARD_LOG_LEVEL
# - SPENDBOARD_LOG_FORMAT

[gateway]
# Base URL of the expense backend's REST API
base_url = "http://localhost:8080/api"

# Request timeout in seconds
request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
