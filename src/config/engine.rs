use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::gesture::GesturePolicy;
use crate::domain::validation::ValidationMode;

/// Tunable engine behaviour
///
/// Defaults match the safe behaviour: structural validation and rejection
/// of unrecognized swipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EngineConfig {
    pub validation: ValidationMode,
    pub gestures: GesturePolicy,
}

impl EngineConfig {
    /// Configuration that also checks every axis coordinate
    pub fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
            ..Self::default()
        }
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    pub fn with_gestures(mut self, gestures: GesturePolicy) -> Self {
        self.gestures = gestures;
        self
    }

    /// Parses a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Loads a JSON configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("Invalid configuration: {0}")]
    Parse(#[source] serde_json::Error),
}
