// Shorthand expansion configuration
use serde::{Deserialize, Serialize};

/// Configuration for shorthand expansion
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShorthandConfig {
    /// Emit a warning when a shorthand gets a value count it cannot expand.
    /// The declaration is dropped either way.
    pub warn_on_invalid_arity: bool,
}

impl Default for ShorthandConfig {
    fn default() -> Self {
        Self {
            warn_on_invalid_arity: true,
        }
    }
}

impl ShorthandConfig {
    /// Load a configuration from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Serialize(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Invalid shorthand config: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize shorthand config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) | ConfigError::Serialize(e) => Some(e),
        }
    }
}
