//! Core domain concepts shared across all subdomains.
//!
//! - [`number::Number`]: a numeric setting value (integer or float)
//! - [`error::EncoderError`]: the encoder error taxonomy

pub mod error;
pub mod number;
