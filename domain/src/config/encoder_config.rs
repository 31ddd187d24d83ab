//! Static configuration of one encoder

use super::ExpectedType;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Encoder section of a configuration file.
///
/// ```toml
/// name = "dotnet"
/// before = "$ErrorActionPreference = 'Stop'"
///
/// [settings.UriScavengerPeriod]
/// min = 10
/// max = 20
/// step = 5
/// default = 10
///
/// [settings.WebConfig]
/// ```
///
/// Per-setting options stay raw here; they are checked when the encoder is built
/// so the error can name the setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    /// Encoder identifier, e.g. `dotnet`
    pub name: String,
    pub settings: BTreeMap<String, Value>,
    /// Text emitted before the encoded statements
    pub before: String,
    /// Text emitted after the encoded statements
    pub after: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_type: Option<ExpectedType>,
}

impl EncoderConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper to add a setting with its raw options.
    pub fn with_setting(mut self, name: impl Into<String>, options: Value) -> Self {
        self.settings.insert(name.into(), options);
        self
    }
}
