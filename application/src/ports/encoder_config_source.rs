//! Encoder configuration port.
//!
//! Use cases obtain the static encoder section through this port so that the
//! file format and its location stay an infrastructure concern.

use winconf_domain::EncoderConfig;

/// Errors from loading encoder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSourceError {
    pub message: String,
}

impl ConfigSourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigSourceError {}

/// Port for loading the encoder section.
pub trait EncoderConfigSource: Send + Sync {
    fn load(&self) -> Result<EncoderConfig, ConfigSourceError>;
}

/// A source holding an already built configuration.
#[derive(Debug, Clone)]
pub struct StaticConfigSource {
    config: EncoderConfig,
}

impl StaticConfigSource {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }
}

impl EncoderConfigSource for StaticConfigSource {
    fn load(&self) -> Result<EncoderConfig, ConfigSourceError> {
        Ok(self.config.clone())
    }
}
