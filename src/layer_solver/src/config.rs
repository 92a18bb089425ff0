use cube_core::ConfigError;
use serde::{Deserialize, Serialize};

/// Solver configuration.
///
/// ```toml
/// max_steps = 32
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Upper bound on solver steps, where a step places or lifts one piece.
    pub max_steps: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_steps: 64 }
    }
}

impl SolverConfig {
    /// Parses and validates a TOML document. Every key is optional.
    ///
    /// # Errors
    ///
    /// If the document is not valid TOML, names an unknown key, or fails
    /// validation.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<SolverConfig>(s)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// If `max_steps` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps == 0 {
            return Err(ConfigError::Invalid(
                "max_steps must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(SolverConfig::from_toml_str("").unwrap().max_steps, 64);
        assert_eq!(
            SolverConfig::from_toml_str("max_steps = 5").unwrap().max_steps,
            5
        );
    }

    #[test]
    fn test_rejects_bad_documents() {
        assert!(matches!(
            SolverConfig::from_toml_str("max_steps = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SolverConfig::from_toml_str("max_steps = -3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SolverConfig::from_toml_str("max_moves = 3"),
            Err(ConfigError::Parse(_))
        ));
    }
}
