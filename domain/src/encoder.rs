//! Encoder: one encode / decode / describe pipeline over a table of settings.
//!
//! An [`Encoder`] is built once from an [`EncoderConfig`] and never mutated
//! afterwards; every operation borrows it immutably.

use crate::config::{EncoderConfig, ExpectedType};
use crate::core::error::EncoderError;
use crate::script::templates::IMPORT_WEB_ADMINISTRATION;
use crate::script::{DecodeSource, DescribeScript};
use crate::setting::descriptor::SettingDescriptor;
use crate::setting::{Setting, SettingTable, unwrap_envelope};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Output of [`Encoder::encode_multi`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EncodedScript {
    Text(String),
    /// One element per line of the text form. The newline terminating the
    /// last statement does not produce a trailing empty element, so an empty
    /// script is an empty list.
    Lines(Vec<String>),
}

impl EncodedScript {
    fn new(text: String, expected_type: ExpectedType) -> Self {
        match expected_type {
            ExpectedType::Str => Self::Text(text),
            ExpectedType::List => Self::Lines(text.lines().map(str::to_string).collect()),
        }
    }

    /// The script as one newline-delimited string
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Lines(lines) => lines.iter().map(|l| format!("{}\n", l)).collect(),
        }
    }

    /// Number of non-empty statements
    pub fn statement_count(&self) -> usize {
        match self {
            Self::Text(text) => text.lines().filter(|l| !l.trim().is_empty()).count(),
            Self::Lines(lines) => lines.iter().filter(|l| !l.trim().is_empty()).count(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Encoder {
    name: String,
    settings: SettingTable,
    before: String,
    after: String,
    expected_type: Option<ExpectedType>,
}

impl Encoder {
    /// Build every configured setting; the first configuration error aborts.
    pub fn new(config: &EncoderConfig) -> Result<Self, EncoderError> {
        let mut settings = SettingTable::new();
        for (name, raw) in &config.settings {
            settings.insert(name.clone(), Setting::from_config(name, raw)?);
        }

        Ok(Self {
            name: config.name.clone(),
            settings,
            before: config.before.clone(),
            after: config.after.clone(),
            expected_type: config.expected_type,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn settings(&self) -> &SettingTable {
        &self.settings
    }

    /// Output type from the static configuration, if any
    pub fn expected_type(&self) -> Option<ExpectedType> {
        self.expected_type
    }

    /// Describe every owned setting.
    ///
    /// With `adjust`, the config-list setting is expanded for each path it lists.
    pub fn describe(
        &self,
        adjust: Option<&Value>,
    ) -> Result<BTreeMap<String, SettingDescriptor>, EncoderError> {
        self.settings
            .iter()
            .map(|(name, setting)| Ok((name.clone(), setting.describe(&self.settings, adjust)?)))
            .collect()
    }

    /// Encode the requested values into one write script.
    ///
    /// Values are claimed by name; an absent or null value leaves the setting
    /// untouched. Any value no owned setting claims fails the whole call
    /// before anything is encoded. Web-config statements come first, behind a
    /// single module import, followed by registry statements.
    pub fn encode_multi(
        &self,
        mut values: Map<String, Value>,
        expected_type: Option<ExpectedType>,
    ) -> Result<EncodedScript, EncoderError> {
        let mut requested: Vec<(&Setting, Value)> = Vec::new();
        for (name, setting) in &self.settings {
            let Some(raw) = values.remove(name.as_str()) else {
                continue;
            };
            if let Some(value) = unwrap_envelope(&raw) {
                requested.push((setting, value.clone()));
            }
        }

        if !values.is_empty() {
            let leftover: Vec<&str> = values.keys().map(String::as_str).collect();
            return Err(EncoderError::EncoderRuntime(format!(
                "We received settings to encode we do not support: {}",
                leftover.join(", ")
            )));
        }

        let mut targets = BTreeSet::new();
        for (setting, value) in &requested {
            for target in setting.write_targets(value, &self.settings)? {
                if !targets.insert(target.clone()) {
                    let (path, name) = target;
                    return Err(EncoderError::EncoderRuntime(format!(
                        "Setting \"{}\" is written more than once at path \"{}\"",
                        name, path
                    )));
                }
            }
        }

        let mut web_config = String::new();
        let mut registry = String::new();
        for (setting, value) in &requested {
            let statements = setting.encode_option(value, &self.settings)?;
            if setting.is_web_config() {
                web_config.push_str(&statements);
            } else {
                registry.push_str(&statements);
            }
        }

        let mut script = String::new();
        push_fragment(&mut script, &self.before);
        if !web_config.is_empty() {
            script.push_str(IMPORT_WEB_ADMINISTRATION);
            script.push_str(&web_config);
        }
        script.push_str(&registry);
        push_fragment(&mut script, &self.after);

        let expected_type = expected_type.or(self.expected_type).unwrap_or_default();
        Ok(EncodedScript::new(script, expected_type))
    }

    /// Decode current values from a structured snapshot, a script, or script lines.
    pub fn decode_multi(&self, data: Value) -> Result<BTreeMap<String, Value>, EncoderError> {
        let source = DecodeSource::from_value(data)?;
        self.decode_source(&source)
    }

    /// Decode every owned setting; the result always covers the whole table.
    pub fn decode_source(
        &self,
        source: &DecodeSource,
    ) -> Result<BTreeMap<String, Value>, EncoderError> {
        self.settings
            .iter()
            .map(|(name, setting)| Ok((name.clone(), setting.decode_option(source, &self.settings)?)))
            .collect()
    }

    /// One read script covering every owned setting, each registry key and
    /// `(path, filter)` pair read once.
    pub fn encode_describe(&self, adjust: Option<&Value>) -> Result<String, EncoderError> {
        let mut script = DescribeScript::new();
        for setting in self.settings.values() {
            setting.encode_describe(adjust, &self.settings, &mut script)?;
        }
        Ok(script.render())
    }
}

fn push_fragment(script: &mut String, fragment: &str) {
    if fragment.is_empty() {
        return;
    }
    script.push_str(fragment);
    if !fragment.ends_with('\n') {
        script.push('\n');
    }
}
