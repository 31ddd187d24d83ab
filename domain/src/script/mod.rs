//! PowerShell script production and scanning.
//!
//! - [`templates`]: the fixed write/read statements
//! - [`scanner`]: recovering assignments from a write script
//! - [`describe`]: assembling the read (describe) script
//! - [`source`]: [`DecodeSource`], the two accepted decode inputs

pub mod describe;
pub mod scanner;
pub mod source;
pub mod templates;

pub use describe::{DescribeScript, WEB_CONFIG_SECTION};
pub use source::DecodeSource;
