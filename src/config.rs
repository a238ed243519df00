//! Extractor configuration
//!
//! Defaults give the standard extraction rules; every knob can be
//! overridden from the environment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_DEPTH: usize = 128;
pub const DEFAULT_NESTED_PREPOSITION: &str = "in";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Trees deeper than this are rejected before evaluation
    pub max_depth: usize,

    /// Treat capitalized prepositions as fronted phrases about the subject
    pub fronted_prepositions: bool,

    /// Preposition whose chains are flattened into one object list
    pub nested_preposition: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            fronted_prepositions: true,
            nested_preposition: DEFAULT_NESTED_PREPOSITION.to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("TREEREL_MAX_DEPTH") {
            config.max_depth = match value.parse() {
                Ok(depth) if depth > 0 => depth,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "TREEREL_MAX_DEPTH".to_string(),
                        value,
                    });
                }
            };
        }

        if let Some(value) = lookup("TREEREL_FRONTED_PREPOSITIONS") {
            config.fronted_prepositions = match value.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "TREEREL_FRONTED_PREPOSITIONS".to_string(),
                        value,
                    });
                }
            };
        }

        if let Some(value) = lookup("TREEREL_NESTED_PREPOSITION") {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "TREEREL_NESTED_PREPOSITION".to_string(),
                    value,
                });
            }
            config.nested_preposition = value.trim().to_string();
        }

        Ok(config)
    }
}
