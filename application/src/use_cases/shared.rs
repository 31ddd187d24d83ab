//! Shared pieces of the use cases: the error type and encoder loading.

use crate::encoders::EncoderRegistry;
use crate::ports::encoder_config_source::{ConfigSourceError, EncoderConfigSource};
use thiserror::Error;
use winconf_domain::{Encoder, EncoderError, ExpectedType};

/// Errors that can occur in any use case.
#[derive(Error, Debug)]
pub enum EncodeServiceError {
    #[error("No encoder name specified")]
    MissingName,

    #[error("Unable to find encoder \"{0}\"; available encoders: dotnet")]
    UnknownEncoder(String),

    #[error(
        "Cannot set `expected_type` both in the config and in the driver. \
         Got from the config: \"{config}\". Got from the driver: \"{driver}\"."
    )]
    ConflictingExpectedType {
        config: ExpectedType,
        driver: ExpectedType,
    },

    #[error("Configuration error: {0}")]
    Source(#[from] ConfigSourceError),

    #[error(transparent)]
    Encoder(#[from] EncoderError),
}

impl EncodeServiceError {
    /// Whether the failure comes from static configuration rather than runtime input.
    pub fn is_config(&self) -> bool {
        match self {
            EncodeServiceError::Encoder(e) => e.is_config(),
            EncodeServiceError::MissingName
            | EncodeServiceError::UnknownEncoder(_)
            | EncodeServiceError::ConflictingExpectedType { .. }
            | EncodeServiceError::Source(_) => true,
        }
    }
}

/// Load the encoder section and build its encoder.
pub(crate) fn load_encoder(source: &dyn EncoderConfigSource) -> Result<Encoder, EncodeServiceError> {
    let config = source.load()?;
    EncoderRegistry::build(&config)
}
