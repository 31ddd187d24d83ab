//! IIS web-configuration settings.
//!
//! A web-config setting is scoped by `(path, filter, field name)`. The path is
//! not part of the setting: it is passed to every call, because one instance
//! is evaluated against many paths inside a config list.

use super::base::RangeSetting;
use super::descriptor::SettingDescriptor;
use crate::core::error::EncoderError;
use crate::core::number::Number;
use crate::script::{DecodeSource, WEB_CONFIG_SECTION, scanner, templates};
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
pub struct WebConfigSetting {
    range: RangeSetting,
    filter: &'static str,
    name_override: Option<&'static str>,
}

impl WebConfigSetting {
    pub fn new(
        range: RangeSetting,
        filter: &'static str,
        name_override: Option<&'static str>,
    ) -> Self {
        Self {
            range,
            filter,
            name_override,
        }
    }

    pub fn name(&self) -> &'static str {
        self.range.name()
    }

    /// Configuration section locator, e.g. `system.webServer/caching`
    pub fn filter(&self) -> &'static str {
        self.filter
    }

    /// Property name as IIS knows it
    pub fn field_name(&self) -> &'static str {
        self.name_override.unwrap_or_else(|| self.name())
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

    /// One `Set-WebConfigurationProperty` line scoped to `path`.
    pub fn encode_option(&self, path: &str, value: &Value) -> Result<String, EncoderError> {
        let encoded = self.range.encode_value(value)?;
        Ok(templates::set_web_configuration_property(
            self.filter,
            path,
            self.field_name(),
            &encoded,
        ))
    }

    /// Read statement for this setting's section at `path`.
    ///
    /// Settings sharing a filter produce identical statements; callers read
    /// each `(path, filter)` pair once.
    pub fn encode_describe(&self, path: &str) -> String {
        templates::get_web_configuration(path, self.filter)
    }

    pub fn decode_option(&self, path: &str, source: &DecodeSource) -> Result<Number, EncoderError> {
        match source {
            DecodeSource::Structured(data) => {
                let section = self.locate_section(data, path)?;
                self.decode_section(section)
            }
            DecodeSource::ScriptText(script) => {
                let matches =
                    scanner::web_config_values(script, self.filter, path, self.field_name());
                self.range.decode_scanned(matches, script)
            }
        }
    }

    /// Decode from the object `Get-WebConfiguration` returned for this setting's filter.
    pub fn decode_section(&self, section: &Map<String, Value>) -> Result<Number, EncoderError> {
        self.range.decode_raw(section.get(self.field_name()))
    }

    fn locate_section<'a>(
        &self,
        data: &'a Map<String, Value>,
        path: &str,
    ) -> Result<&'a Map<String, Value>, EncoderError> {
        let section = data
            .get(WEB_CONFIG_SECTION)
            .and_then(|wc| wc.get(path))
            .and_then(|p| p.get(self.filter))
            .ok_or_else(|| {
                EncoderError::runtime_decode(
                    self.name(),
                    format!("{}/{}/{}", WEB_CONFIG_SECTION, path, self.filter),
                    "Unable to locate the configuration section in the describe data",
                )
            })?;
        section.as_object().ok_or_else(|| {
            EncoderError::runtime_decode(
                self.name(),
                section,
                "Configuration section must be a dictionary",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setting::Setting;
    use serde_json::json;

    const FILTER: &str = "system.webServer/caching";
    const SITE: &str = "MACHINE/WEBROOT/APPHOST/TestSite";

    fn web(name: &str) -> WebConfigSetting {
        match Setting::from_config(name, &Value::Null).unwrap() {
            Setting::WebConfig(s) => s,
            other => panic!("not a web config setting: {other:?}"),
        }
    }

    fn snapshot(path: &str, section: Value) -> DecodeSource {
        DecodeSource::from_value(json!({ "WebConfig": { path: { FILTER: section } } })).unwrap()
    }

    #[test]
    fn test_field_name_uses_override() {
        assert_eq!(web("WebConfigCacheEnabled").field_name(), "enabled");
        assert_eq!(web("WebConfigEnableKernelCache").field_name(), "enableKernelCache");
    }

    #[test]
    fn test_encode_option_scoped_to_path() {
        let s = web("WebConfigCacheEnabled");
        assert_eq!(
            s.encode_option(SITE, &json!(0)).unwrap(),
            format!(
                "Set-WebConfigurationProperty -Filter \"{FILTER}\" -PSPath \"{SITE}\" -Name \"enabled\" -Value False\n"
            )
        );
    }

    #[test]
    fn test_text_round_trip_per_path() {
        let s = web("WebConfigMaxResponseSize");
        let script = format!(
            "{}{}",
            s.encode_option("A", &json!(1024)).unwrap(),
            s.encode_option("B", &json!(2048)).unwrap()
        );
        let source = DecodeSource::ScriptText(script);
        assert_eq!(s.decode_option("A", &source).unwrap(), Number::Int(1024));
        assert_eq!(s.decode_option("B", &source).unwrap(), Number::Int(2048));
        assert_eq!(s.decode_option("C", &source).unwrap(), Number::Int(262_144));
    }

    #[test]
    fn test_structured_round_trip_of_boolean() {
        let s = web("WebConfigCacheEnabled");
        let source = snapshot(SITE, json!({"enabled": false, "enableKernelCache": true}));
        assert_eq!(s.decode_option(SITE, &source).unwrap(), Number::Int(0));
        let k = web("WebConfigEnableKernelCache");
        assert_eq!(k.decode_option(SITE, &source).unwrap(), Number::Int(1));
    }

    #[test]
    fn test_structured_missing_field_is_default() {
        let s = web("WebConfigMaxCacheSize");
        let source = snapshot(SITE, json!({"enabled": true}));
        assert_eq!(s.decode_option(SITE, &source).unwrap(), Number::Int(0));
    }

    #[test]
    fn test_structured_missing_section_is_decode_error() {
        let s = web("WebConfigCacheEnabled");
        let source = snapshot(SITE, json!({"enabled": true}));
        let err = s.decode_option("MACHINE/WEBROOT/APPHOST", &source).unwrap_err();
        assert!(matches!(err, EncoderError::RuntimeDecode { .. }));
    }

    #[test]
    fn test_encode_describe_identical_for_shared_filter() {
        let a = web("WebConfigCacheEnabled");
        let b = web("WebConfigEnableKernelCache");
        assert_eq!(a.encode_describe("P"), b.encode_describe("P"));
        assert_eq!(
            a.encode_describe("P"),
            format!("Get-WebConfiguration -pspath \"P\" -filter \"{FILTER}\"")
        );
    }
}
