//! Static encoder configuration
//!
//! These value objects are deserialized by the infrastructure layer and
//! consumed by [`crate::Encoder::new`].

mod encoder_config;
mod expected_type;

pub use encoder_config::EncoderConfig;
pub use expected_type::ExpectedType;
