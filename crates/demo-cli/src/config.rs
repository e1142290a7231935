//! Host configuration
//!
//! TOML file (optional) overlaid with `DEMO_`-prefixed environment
//! variables. Missing keys fall back to defaults.

use demo_profile::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment override for the default user id
pub const ENV_DEFAULT_USER: &str = "DEMO_DEFAULT_USER";

/// Environment override for JSON log output
pub const ENV_LOG_JSON: &str = "DEMO_LOG_JSON";

/// Environment override for the random seed
pub const ENV_SEED: &str = "DEMO_SEED";

/// Errors while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for [`AppConfig`]
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level host configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Profile store settings
    pub store: StoreConfig,
    /// Log output settings
    pub logging: LoggingConfig,
    /// Seeding of the weather and style services
    pub random: RandomConfig,
}

/// Seeding of the random services
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed for reproducible output; `None` seeds from the OS
    pub seed: Option<u64>,
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
    /// Filter used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse TOML text; `path` is only used for error messages
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on malformed input
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the file if given, then apply process environment overrides
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or parsed
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml_str(&text, path)?
            }
            None => Self::default(),
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from `lookup` (normally the process environment)
    #[must_use]
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(user) = lookup(ENV_DEFAULT_USER).filter(|v| !v.trim().is_empty()) {
            self.store.default_user_id = user;
        }
        if let Some(json) = lookup(ENV_LOG_JSON).and_then(|v| parse_bool(&v)) {
            self.logging.json = json;
        }
        if let Some(seed) = lookup(ENV_SEED).and_then(|v| v.trim().parse().ok()) {
            self.random.seed = Some(seed);
        }
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}
