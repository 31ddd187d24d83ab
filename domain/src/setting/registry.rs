//! Registry-backed settings: one value under a fixed registry key.

use super::base::RangeSetting;
use super::descriptor::SettingDescriptor;
use crate::core::error::EncoderError;
use crate::core::number::Number;
use crate::script::DecodeSource;
use crate::script::{scanner, templates};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct RegistrySetting {
    range: RangeSetting,
    path: &'static str,
}

impl RegistrySetting {
    pub fn new(range: RangeSetting, path: &'static str) -> Self {
        Self { range, path }
    }

    pub fn name(&self) -> &'static str {
        self.range.name()
    }

    /// Registry key holding the value
    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn range(&self) -> &RangeSetting {
        &self.range
    }

    pub fn validate_value(&self, value: &Value) -> Result<Number, EncoderError> {
        self.range.validate_value(Some(value))
    }

    pub fn describe(&self) -> SettingDescriptor {
        self.range.describe()
    }

    /// One `Set-ItemProperty` line.
    pub fn encode_option(&self, value: &Value) -> Result<String, EncoderError> {
        let encoded = self.range.encode_value(value)?;
        Ok(templates::set_item_property(self.path, self.name(), &encoded))
    }

    /// Hashtable entry reading the whole key; run once per unique path.
    pub fn encode_describe(&self) -> String {
        format!(
            "\"{}\" = {}",
            self.path,
            templates::get_item_property(self.path)
        )
    }

    pub fn decode_option(&self, source: &DecodeSource) -> Result<Number, EncoderError> {
        match source {
            DecodeSource::Structured(data) => {
                let key = data.get(self.path).ok_or_else(|| {
                    EncoderError::runtime_decode(
                        self.name(),
                        self.path,
                        "Registry path was not found in describe data",
                    )
                })?;
                let Value::Object(values) = key else {
                    return Err(EncoderError::runtime_decode(
                        self.name(),
                        key,
                        "Registry path must describe a dictionary of values",
                    ));
                };
                // A key that was never written lists no value; the system default applies
                self.range.decode_raw(values.get(self.name()))
            }
            DecodeSource::ScriptText(script) => {
                let matches = scanner::registry_values(script, self.path, self.name());
                self.range.decode_scanned(matches, script)
            }
        }
    }
}
