//! Domain error types

use thiserror::Error;

/// Errors raised while building an encoder or running it against values and snapshots.
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | [`Config`](Self::Config) | static configuration is malformed (construction time) |
/// | [`RuntimeValue`](Self::RuntimeValue) | a value offered for encoding violates its domain |
/// | [`RuntimeDecode`](Self::RuntimeDecode) | a setting's state cannot be located or parsed in a snapshot |
/// | [`EncoderRuntime`](Self::EncoderRuntime) | structural mismatch at the encoder level |
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncoderError {
    #[error("Setting \"{setting}\" is misconfigured: {message}")]
    Config { setting: String, message: String },

    #[error("Invalid value {value} for setting \"{setting}\": {message}")]
    RuntimeValue {
        setting: String,
        value: String,
        message: String,
    },

    #[error("Cannot decode setting \"{setting}\" from {raw}: {message}")]
    RuntimeDecode {
        setting: String,
        raw: String,
        message: String,
    },

    #[error("Encoder error: {0}")]
    EncoderRuntime(String),
}

impl EncoderError {
    pub fn config(setting: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            setting: setting.into(),
            message: message.into(),
        }
    }

    pub fn runtime_value(
        setting: impl Into<String>,
        value: impl std::fmt::Display,
        message: impl Into<String>,
    ) -> Self {
        Self::RuntimeValue {
            setting: setting.into(),
            value: value.to_string(),
            message: message.into(),
        }
    }

    pub fn runtime_decode(
        setting: impl Into<String>,
        raw: impl std::fmt::Display,
        message: impl Into<String>,
    ) -> Self {
        Self::RuntimeDecode {
            setting: setting.into(),
            raw: crate::util::truncate_str(&raw.to_string(), MAX_RAW_BYTES).to_string(),
            message: message.into(),
        }
    }

    /// Name of the offending setting, when the error is attributable to one
    pub fn setting(&self) -> Option<&str> {
        match self {
            Self::Config { setting, .. }
            | Self::RuntimeValue { setting, .. }
            | Self::RuntimeDecode { setting, .. } => Some(setting),
            Self::EncoderRuntime(_) => None,
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

/// Raw snapshots can be whole scripts; keep error messages readable.
const MAX_RAW_BYTES: usize = 512;

/// A codec could not read an observed value as its expected primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot read {raw} as {expected}")]
pub struct DecodeError {
    pub raw: String,
    pub expected: &'static str,
}

impl DecodeError {
    pub fn new(raw: impl std::fmt::Display, expected: &'static str) -> Self {
        Self {
            raw: raw.to_string(),
            expected,
        }
    }
}
