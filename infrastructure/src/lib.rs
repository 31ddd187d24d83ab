//! Infrastructure layer for winconf
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: encoder configuration loading and input file reading.

pub mod config;
pub mod input;

// Re-export commonly used types
pub use config::{ConfigFormat, ConfigLoader, FileEncoderConfigSource, LoadError};
pub use input::{STDIN_MARKER, read_document, read_text};
