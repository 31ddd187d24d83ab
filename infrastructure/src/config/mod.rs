//! Encoder configuration loading
//!
//! The encoder section is merged from several sources, lowest to highest:
//!
//! 1. Default values
//! 2. The `--config <path>` file (TOML or JSON, chosen by extension),
//!    optionally focused on a dotted section such as `web.encoder`
//! 3. Environment variables prefixed `WINCONF_ENCODER_`

mod loader;
mod source;

pub use loader::{ConfigFormat, ConfigLoader, ENV_KEYS, ENV_PREFIX, LoadError};
pub use source::FileEncoderConfigSource;
