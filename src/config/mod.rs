use crate::catalog::models::CategoryId;
use crate::engine::formatter::{DEFAULT_PRECISION, MAX_PRECISION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "unitconv.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Decimal places before trailing zeros are stripped
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

impl DisplayConfig {
    pub fn precision(&self) -> usize {
        self.precision.min(MAX_PRECISION)
    }

    /// Store a requested precision, warning when it will be clamped
    pub fn set_precision(&mut self, precision: usize) {
        if precision > MAX_PRECISION {
            log::warn!(
                "display.precision {} is above {}, clamping",
                precision,
                MAX_PRECISION
            );
        }
        self.precision = precision;
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_category")]
    pub category: CategoryId,

    // Initial value of the input field, also restored on reset
    #[serde(default = "default_value")]
    pub value: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            value: default_value(),
        }
    }
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_category() -> CategoryId {
    CategoryId::Length
}

fn default_value() -> String {
    "1".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content)?;
        let precision = config.display.precision;
        config.display.set_precision(precision);
        Ok(config)
    }

    /// Explicit path if given, else `unitconv.toml` in `dir` if present,
    /// else built-in defaults.
    pub fn discover<P: AsRef<Path>>(explicit: Option<P>, dir: P) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let candidate = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if candidate.exists() {
            log::debug!("using config {}", candidate.display());
            Self::load_from_file(&candidate)
        } else {
            Ok(Self::empty())
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
