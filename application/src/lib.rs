//! Application layer for winconf
//!
//! This crate contains the encoder registry, the use cases driven by the CLI,
//! and the port through which encoder configuration is loaded.
//! It depends only on the domain layer.

pub mod encoders;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use encoders::{EncoderKind, EncoderRegistry};
pub use ports::encoder_config_source::{ConfigSourceError, EncoderConfigSource, StaticConfigSource};
pub use use_cases::decode::{DecodeInput, DecodeSettingsUseCase};
pub use use_cases::describe::{DescribeInput, DescribeSettingsUseCase, DescribedSetting};
pub use use_cases::encode::{EncodeInput, EncodeOutput, EncodeSettingsUseCase};
pub use use_cases::encode_describe::{EncodeDescribeInput, EncodeDescribeUseCase};
pub use use_cases::shared::EncodeServiceError;
