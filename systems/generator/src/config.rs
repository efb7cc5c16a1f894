//! Tunables of the rejection sampler.

use serde::Deserialize;
use thiserror::Error;

/// Attempt cap of a single generation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    max_attempts: u32,
}

impl GeneratorConfig {
    /// Cap used when no configuration is supplied.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

    /// Creates a configuration with an explicit attempt cap.
    #[must_use]
    pub const fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Maximum number of candidates sampled before giving up.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Parses a TOML document such as `max_attempts = 25000`.
    ///
    /// Missing keys keep their defaults; a zero cap is rejected.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(config)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS)
    }
}

/// Failure to load a [`GeneratorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or has unknown keys.
    #[error("invalid generator configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The attempt cap is zero.
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
}
