//! Range-backed setting state shared by the registry and web-config variants

use super::catalog::RangeDefinition;
use super::descriptor::{RangeDescriptor, SettingDescriptor, SettingKind};
use super::options::SettingOptions;
use super::range::RangeDomain;
use crate::core::error::EncoderError;
use crate::core::number::Number;
use serde_json::Value;

/// A catalog definition bound to its resolved domain, default and unit.
#[derive(Debug, Clone)]
pub struct RangeSetting {
    definition: &'static RangeDefinition,
    domain: RangeDomain,
    default: Number,
    unit: String,
}

impl RangeSetting {
    pub fn new(
        definition: &'static RangeDefinition,
        options: &SettingOptions,
    ) -> Result<Self, EncoderError> {
        let name = definition.name;
        let domain = RangeDomain::resolve(name, &definition.policy, options)?;
        if definition.codec.integral() {
            for (label, bound) in [("min", domain.min), ("max", domain.max), ("step", domain.step)] {
                if !bound.is_integral() {
                    return Err(EncoderError::config(
                        name,
                        format!("Whole numbers only: {} is {}", label, bound),
                    ));
                }
            }
        }
        let default = match options.default {
            Some(default) => domain
                .check(name, default)
                .and_then(|value| Self::check_whole(definition, value))
                .map_err(|e| {
                    EncoderError::config(
                        name,
                        format!("Default value {} is not accepted: {}", default, e),
                    )
                })?,
            None => definition.system_default,
        };
        let unit = options
            .unit
            .clone()
            .unwrap_or_else(|| definition.unit.to_string());

        Ok(Self {
            definition,
            domain,
            default,
            unit,
        })
    }

    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    pub fn kind(&self) -> SettingKind {
        self.definition.kind
    }

    pub fn domain(&self) -> &RangeDomain {
        &self.domain
    }

    /// Configured default, or the system default when none is configured
    pub fn default(&self) -> Number {
        self.default
    }

    pub fn system_default(&self) -> Number {
        self.definition.system_default
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn validate_value(&self, value: Option<&Value>) -> Result<Number, EncoderError> {
        let value = self.domain.validate_value(self.name(), value)?;
        Self::check_whole(self.definition, value)
    }

    fn check_whole(definition: &RangeDefinition, value: Number) -> Result<Number, EncoderError> {
        if definition.codec.integral() && !value.is_integral() {
            return Err(EncoderError::runtime_value(
                definition.name,
                value,
                "Value must be a whole number",
            ));
        }
        Ok(value)
    }

    pub fn describe(&self) -> SettingDescriptor {
        let descriptor = RangeDescriptor {
            min: self.domain.min,
            max: self.domain.max,
            step: self.domain.step,
            unit: self.unit.clone(),
            default: self.default,
            system_default: self.definition.system_default,
        };
        match self.kind() {
            SettingKind::Bool => SettingDescriptor::Bool(descriptor),
            _ => SettingDescriptor::Range(descriptor),
        }
    }

    /// Validate and transcode a runtime value into script text.
    pub fn encode_value(&self, value: &Value) -> Result<String, EncoderError> {
        let value = self.validate_value(Some(value))?;
        Ok(self.definition.codec.encode(value))
    }

    /// Transcode an observed raw value; an absent value means the default is in effect.
    pub fn decode_raw(&self, raw: Option<&Value>) -> Result<Number, EncoderError> {
        let Some(raw) = raw else {
            return Ok(self.default);
        };
        self.definition.codec.decode(raw).map_err(|e| {
            EncoderError::runtime_decode(self.name(), raw, format!("Invalid value to decode: {}", e))
        })
    }

    /// Resolve the values scanned from a write script.
    ///
    /// No match means the setting was never written; more than one is ambiguous.
    pub fn decode_scanned(&self, matches: Vec<String>, script: &str) -> Result<Number, EncoderError> {
        match matches.as_slice() {
            [] => Ok(self.default),
            [single] => self.decode_raw(Some(&Value::String(single.clone()))),
            _ => Err(EncoderError::runtime_decode(
                self.name(),
                script,
                format!(
                    "Found {} values for the setting in the provided script",
                    matches.len()
                ),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setting::catalog::{SettingDefinition, lookup_setting};
    use serde_json::json;

    fn definition(name: &str) -> &'static RangeDefinition {
        match lookup_setting(name) {
            Some(SettingDefinition::Registry { base, .. })
            | Some(SettingDefinition::WebConfig { base, .. }) => base,
            other => panic!("not a range setting: {other:?}"),
        }
    }

    fn setting(name: &str, raw: Value) -> Result<RangeSetting, EncoderError> {
        let options = SettingOptions::from_value(name, &raw)?;
        RangeSetting::new(definition(name), &options)
    }

    #[test]
    fn test_defaults_to_system_default() {
        let s = setting("UriScavengerPeriod", Value::Null).unwrap();
        assert_eq!(s.default(), Number::Int(120));
        assert_eq!(s.unit(), "seconds");
        assert_eq!(s.domain().min, Number::Int(10));
    }

    #[test]
    fn test_configured_default_wins() {
        let s = setting(
            "UriScavengerPeriod",
            json!({"min": 10, "max": 20, "step": 5, "default": 10}),
        )
        .unwrap();
        assert_eq!(s.default(), Number::Int(10));
        assert_eq!(s.system_default(), Number::Int(120));
    }

    #[test]
    fn test_default_outside_domain_is_config_error() {
        let err = setting("UriScavengerPeriod", json!({"max": 20, "default": 30})).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("Default value 30"));
    }

    #[test]
    fn test_integer_codec_rejects_fractional_bounds() {
        let err = setting("WebConfigMaxResponseSize", json!({"min": 0, "max": 10, "step": 0.5}))
            .unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("step is 0.5"));

        let err = setting("WebConfigMaxCacheSize", json!({"min": 0.5, "max": 10.5, "step": 1}))
            .unwrap_err();
        assert!(err.is_config());

        let s = setting("WebConfigMaxCacheSize", json!({"min": 0, "max": 10.0, "step": 1})).unwrap();
        assert_eq!(s.domain().max, Number::Float(10.0));
    }

    #[test]
    fn test_integer_codec_rejects_fractional_values() {
        let s = setting("WebConfigMaxCacheSize", json!({"min": 0, "max": 10, "step": 1})).unwrap();
        let err = s.validate_value(Some(&json!(1.5))).unwrap_err();
        assert!(matches!(err, EncoderError::RuntimeValue { .. }));
        assert_eq!(s.encode_value(&json!(4.0)).unwrap(), "4");

        let err = setting("WebConfigMaxCacheSize", json!({"max": 10, "default": 2.5})).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_describe_bool_kind() {
        let s = setting("UriEnableCache", Value::Null).unwrap();
        let descriptor = s.describe();
        assert_eq!(descriptor.kind(), SettingKind::Bool);
        let range = descriptor.as_range().unwrap();
        assert_eq!(range.max, Number::Int(1));
        assert_eq!(range.system_default, Number::Int(1));
    }

    #[test]
    fn test_unit_option_overrides_display_unit() {
        let s = setting("WebConfigMaxResponseSize", json!({"unit": "B"})).unwrap();
        assert_eq!(s.unit(), "B");
    }

    #[test]
    fn test_decode_raw_failure_names_setting_and_raw() {
        let s = setting("UriScavengerPeriod", Value::Null).unwrap();
        let err = s.decode_raw(Some(&json!("soon"))).unwrap_err();
        match err {
            EncoderError::RuntimeDecode { setting, raw, .. } => {
                assert_eq!(setting, "UriScavengerPeriod");
                assert!(raw.contains("soon"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_scanned() {
        let s = setting("UriScavengerPeriod", Value::Null).unwrap();
        assert_eq!(s.decode_scanned(vec![], "").unwrap(), Number::Int(120));
        assert_eq!(
            s.decode_scanned(vec!["240".to_string()], "").unwrap(),
            Number::Int(240)
        );
        let err = s
            .decode_scanned(vec!["240".to_string(), "60".to_string()], "script")
            .unwrap_err();
        assert!(matches!(err, EncoderError::RuntimeDecode { .. }));
    }
}
