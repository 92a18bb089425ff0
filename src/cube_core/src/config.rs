use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{face::RotationCommand, state::CubeState};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How random shuffles are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrambleConfig {
    /// Number of quarter turns per scramble.
    pub length: usize,
    /// Fixed seed for reproducible scrambles. Seeded from entropy when unset.
    pub seed: Option<u64>,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            length: 20,
            seed: None,
        }
    }
}

impl ScrambleConfig {
    /// # Errors
    ///
    /// If `length` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length == 0 {
            return Err(ConfigError::Invalid(
                "scramble.length must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Global cube configuration.
///
/// ```toml
/// initial_commands = ["R", "U'"]
///
/// [scramble]
/// length = 25
/// seed = 7
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CubeConfig {
    /// Commands applied to the solved cube before anything else happens.
    pub initial_commands: Vec<RotationCommand>,
    pub scramble: ScrambleConfig,
}

impl CubeConfig {
    /// Parses and validates a TOML document. Every key is optional.
    ///
    /// # Errors
    ///
    /// If the document is not valid TOML, names an unknown key or an invalid
    /// move, or fails validation.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<CubeConfig>(s)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// If any section is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scramble.validate()
    }

    #[must_use]
    pub fn initial_state(&self) -> CubeState {
        CubeState::from_commands(&self.initial_commands)
    }
}
