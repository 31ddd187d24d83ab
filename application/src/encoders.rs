//! Encoder lookup by name.
//!
//! The static configuration names its encoder. Only the `dotnet` encoder
//! (Windows registry and IIS configuration through PowerShell) exists.

use crate::use_cases::shared::EncodeServiceError;
use std::fmt;
use tracing::debug;
use winconf_domain::{Encoder, EncoderConfig};

/// Encoders this build can construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderKind {
    Dotnet,
}

impl EncoderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncoderKind::Dotnet => "dotnet",
        }
    }
}

impl fmt::Display for EncoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolves encoder names and builds encoders.
pub struct EncoderRegistry;

impl EncoderRegistry {
    /// All encoders this build can construct.
    pub const AVAILABLE: &'static [EncoderKind] = &[EncoderKind::Dotnet];

    pub fn resolve(name: &str) -> Result<EncoderKind, EncodeServiceError> {
        Self::AVAILABLE
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| EncodeServiceError::UnknownEncoder(name.to_string()))
    }

    /// Validate the configuration envelope and build the named encoder.
    pub fn build(config: &EncoderConfig) -> Result<Encoder, EncodeServiceError> {
        if config.name.trim().is_empty() {
            return Err(EncodeServiceError::MissingName);
        }
        let kind = Self::resolve(&config.name)?;
        let encoder = match kind {
            EncoderKind::Dotnet => Encoder::new(config)?,
        };
        debug!(
            "Built {} encoder with {} settings",
            kind,
            encoder.settings().len()
        );
        Ok(encoder)
    }
}
