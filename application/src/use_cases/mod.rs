//! Use cases
//!
//! Application-level operations that orchestrate domain logic. Each one loads
//! the encoder section through [`EncoderConfigSource`](crate::ports::encoder_config_source::EncoderConfigSource),
//! builds the named encoder and runs one pipeline over it.

pub mod decode;
pub mod describe;
pub mod encode;
pub mod encode_describe;
pub mod shared;
