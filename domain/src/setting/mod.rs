//! Settings: validation, describe, encode and decode of individual tunables.
//!
//! A [`Setting`] is one of three closed variants sharing one capability set.
//! Registry and web-config settings compose a [`base::RangeSetting`]; the
//! config-list aggregate borrows web-config settings from the owning table.

pub mod base;
pub mod catalog;
pub mod config_list;
pub mod descriptor;
pub mod options;
pub mod range;
pub mod registry;
pub mod web_config;

use crate::core::error::EncoderError;
use crate::script::{DecodeSource, DescribeScript};
use base::RangeSetting;
use catalog::{DEFAULT_WEB_CONFIG_PATH, SettingDefinition, lookup_setting};
use config_list::ConfigListSetting;
use descriptor::{SettingDescriptor, SettingKind};
use options::SettingOptions;
use registry::RegistrySetting;
use serde_json::Value;
use std::collections::BTreeMap;
use web_config::WebConfigSetting;

/// Settings owned by one encoder, keyed and iterated by name.
pub type SettingTable = BTreeMap<String, Setting>;

#[derive(Debug, Clone)]
pub enum Setting {
    Registry(RegistrySetting),
    WebConfig(WebConfigSetting),
    ConfigList(ConfigListSetting),
}

impl Setting {
    /// Build a setting from its identifier and raw option map.
    ///
    /// Unknown identifiers and unknown or inconsistent options are
    /// configuration errors.
    pub fn from_config(name: &str, raw: &Value) -> Result<Self, EncoderError> {
        let definition = lookup_setting(name).ok_or_else(|| {
            EncoderError::config(name, format!("Setting \"{}\" is not supported in dotnet encoder.", name))
        })?;
        let options = SettingOptions::from_value(name, raw)?;

        match definition {
            SettingDefinition::Registry { base, path } => Ok(Self::Registry(RegistrySetting::new(
                RangeSetting::new(base, &options)?,
                *path,
            ))),
            SettingDefinition::WebConfig {
                base,
                filter,
                name_override,
            } => Ok(Self::WebConfig(WebConfigSetting::new(
                RangeSetting::new(base, &options)?,
                *filter,
                *name_override,
            ))),
            SettingDefinition::ConfigList { name } => {
                if !options.is_empty() {
                    return Err(EncoderError::config(
                        *name,
                        "A config list takes no options; configure the settings it references instead",
                    ));
                }
                Ok(Self::ConfigList(ConfigListSetting::new(*name)))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Registry(s) => s.name(),
            Self::WebConfig(s) => s.name(),
            Self::ConfigList(s) => s.name(),
        }
    }

    pub fn kind(&self) -> SettingKind {
        match self {
            Self::Registry(s) => s.range().kind(),
            Self::WebConfig(s) => s.range().kind(),
            Self::ConfigList(_) => SettingKind::ConfigList,
        }
    }

    /// Web-config settings and the aggregate are written through the
    /// WebAdministration module.
    pub fn is_web_config(&self) -> bool {
        matches!(self, Self::WebConfig(_) | Self::ConfigList(_))
    }

    pub fn validate_value(&self, value: &Value, owned: &SettingTable) -> Result<(), EncoderError> {
        match self {
            Self::Registry(s) => s.validate_value(value).map(drop),
            Self::WebConfig(s) => s.validate_value(value).map(drop),
            Self::ConfigList(s) => s.validate_value(value, owned).map(drop),
        }
    }

    /// Static description; the aggregate expands per path when `adjust` is given.
    pub fn describe(
        &self,
        owned: &SettingTable,
        adjust: Option<&Value>,
    ) -> Result<SettingDescriptor, EncoderError> {
        match self {
            Self::Registry(s) => Ok(s.describe()),
            Self::WebConfig(s) => Ok(s.describe()),
            Self::ConfigList(s) => s.describe(adjust, owned),
        }
    }

    /// Write statements for `value`, without any module preamble.
    ///
    /// A flat web-config setting is written at the default configuration path.
    pub fn encode_option(&self, value: &Value, owned: &SettingTable) -> Result<String, EncoderError> {
        match self {
            Self::Registry(s) => s.encode_option(value),
            Self::WebConfig(s) => s.encode_option(DEFAULT_WEB_CONFIG_PATH, value),
            Self::ConfigList(s) => s.encode_statements(value, owned),
        }
    }

    /// `(path, setting name)` of each web-config property `value` writes.
    pub fn write_targets(
        &self,
        value: &Value,
        owned: &SettingTable,
    ) -> Result<Vec<(String, String)>, EncoderError> {
        match self {
            Self::Registry(_) => Ok(Vec::new()),
            Self::WebConfig(s) => Ok(vec![(
                DEFAULT_WEB_CONFIG_PATH.to_string(),
                s.name().to_string(),
            )]),
            Self::ConfigList(s) => s.write_targets(value, owned),
        }
    }

    /// Current value as JSON: a number for flat settings, records for the aggregate.
    pub fn decode_option(
        &self,
        source: &DecodeSource,
        owned: &SettingTable,
    ) -> Result<Value, EncoderError> {
        match self {
            Self::Registry(s) => s.decode_option(source).map(|n| n.to_json()),
            Self::WebConfig(s) => s
                .decode_option(DEFAULT_WEB_CONFIG_PATH, source)
                .map(|n| n.to_json()),
            Self::ConfigList(s) => s.decode_option(source, owned),
        }
    }

    /// Queue the reads this setting needs into `script`.
    pub fn encode_describe(
        &self,
        adjust: Option<&Value>,
        owned: &SettingTable,
        script: &mut DescribeScript,
    ) -> Result<(), EncoderError> {
        match self {
            Self::Registry(s) => {
                script.read_registry(s.path());
            }
            Self::WebConfig(s) => {
                script.read_web_config(DEFAULT_WEB_CONFIG_PATH, s.filter());
            }
            Self::ConfigList(s) => s.encode_describe(adjust, owned, script)?,
        }
        Ok(())
    }
}

/// Unwrap a runtime value given either as `{"value": x}` or as bare `x`.
///
/// `None` means the value was not requested.
pub fn unwrap_envelope(raw: &Value) -> Option<&Value> {
    let value = match raw {
        Value::Object(map) if map.len() == 1 && map.contains_key("value") => &map["value"],
        other => other,
    };
    if value.is_null() { None } else { Some(value) }
}
