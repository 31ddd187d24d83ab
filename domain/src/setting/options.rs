//! Per-setting static options from the encoder configuration

use crate::core::error::EncoderError;
use crate::core::number::Number;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options a user may put under `settings.<name>` in the encoder configuration.
///
/// ```toml
/// [settings.UriScavengerPeriod]
/// min = 10
/// max = 20
/// step = 5
/// default = 10
/// ```
///
/// Any other key is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingOptions {
    pub min: Option<Number>,
    pub max: Option<Number>,
    pub step: Option<Number>,
    pub default: Option<Number>,
    pub unit: Option<String>,
}

impl SettingOptions {
    /// Parse the raw option block of `setting`. `null` means "no options".
    pub fn from_value(setting: &str, raw: &Value) -> Result<Self, EncoderError> {
        match raw {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => serde_json::from_value(raw.clone()).map_err(|e| {
                EncoderError::config(
                    setting,
                    format!(
                        "{}. Supported options: min, max, step, default, unit",
                        e
                    ),
                )
            }),
            other => Err(EncoderError::config(
                setting,
                format!(
                    "configuration must be a dictionary or undefined, found {}",
                    json_type_name(other)
                ),
            )),
        }
    }

    /// Whether any of `min`, `max` or `step` is given
    pub fn overrides_range(&self) -> bool {
        self.min.is_some() || self.max.is_some() || self.step.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "dictionary",
    }
}
