//! Output formatter trait

use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use winconf_application::{DescribedSetting, EncodeOutput};
use winconf_domain::{EncodedScript, SettingDefinition};

/// Trait for formatting command results
pub trait OutputFormatter {
    /// Setting descriptors, with current values when known
    fn described(&self, settings: &BTreeMap<String, DescribedSetting>) -> String;

    /// Decoded current values
    fn decoded(&self, values: &BTreeMap<String, Value>) -> String;

    /// An encoded write script
    fn encoded(&self, output: &EncodeOutput) -> String;

    /// A read script
    fn read_script(&self, script: &str) -> String;

    /// The catalog of supported settings
    fn catalog(&self, settings: &[SettingDefinition]) -> String;
}

/// Machine-readable JSON output
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn described(&self, settings: &BTreeMap<String, DescribedSetting>) -> String {
        Self::pretty(settings)
    }

    fn decoded(&self, values: &BTreeMap<String, Value>) -> String {
        Self::pretty(values)
    }

    fn encoded(&self, output: &EncodeOutput) -> String {
        let script = match &output.script {
            EncodedScript::Text(text) => json!(text),
            EncodedScript::Lines(lines) => json!(lines),
        };
        Self::pretty(&json!({
            "script": script,
            "settings": output.settings,
        }))
    }

    fn read_script(&self, script: &str) -> String {
        Self::pretty(&json!({ "script": script }))
    }

    fn catalog(&self, settings: &[SettingDefinition]) -> String {
        let entries: Vec<Value> = settings
            .iter()
            .map(|s| json!({ "name": s.name(), "kind": s.kind() }))
            .collect();
        Self::pretty(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use winconf_domain::known_settings;

    #[test]
    fn test_encoded_lines() {
        let output = EncodeOutput {
            script: EncodedScript::Lines(vec!["a".to_string(), "b".to_string()]),
            settings: BTreeSet::from(["UriEnableCache".to_string()]),
        };
        let value: Value = serde_json::from_str(&JsonFormatter.encoded(&output)).unwrap();
        assert_eq!(value, json!({"script": ["a", "b"], "settings": ["UriEnableCache"]}));
    }

    #[test]
    fn test_catalog_lists_every_setting() {
        let value: Value = serde_json::from_str(&JsonFormatter.catalog(known_settings())).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), known_settings().len());
        assert!(entries.contains(&json!({"name": "WebConfig", "kind": "config_list"})));
    }

    #[test]
    fn test_decoded() {
        let values = BTreeMap::from([("UriEnableCache".to_string(), json!(1))]);
        let value: Value = serde_json::from_str(&JsonFormatter.decoded(&values)).unwrap();
        assert_eq!(value, json!({"UriEnableCache": 1}));
    }
}
