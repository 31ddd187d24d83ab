//! Config-list (aggregate) setting.
//!
//! The value is a sequence of path-scoped records:
//!
//! ```json
//! [
//!   {"path": "MACHINE/WEBROOT/APPHOST", "values": {"WebConfigCacheEnabled": 1}},
//!   {"path": "MACHINE/WEBROOT/APPHOST/Site", "values": {"WebConfigMaxCacheSize": 256}}
//! ]
//! ```
//!
//! The aggregate owns no nested settings. Every call borrows the web-config
//! settings of the encoder's table and threads the record path through them.

use super::descriptor::{ConfigListDescriptor, SettingDescriptor};
use super::web_config::WebConfigSetting;
use super::{Setting, SettingTable, unwrap_envelope};
use crate::core::error::EncoderError;
use crate::script::templates::IMPORT_WEB_ADMINISTRATION;
use crate::script::{DecodeSource, DescribeScript, WEB_CONFIG_SECTION, scanner};
use crate::setting::catalog::DEFAULT_WEB_CONFIG_PATH;
use crate::setting::options::json_type_name;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::{BTreeMap, BTreeSet};

/// One `{path, values}` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathRecord {
    pub path: String,
    #[serde(default)]
    pub values: Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct ConfigListSetting {
    name: &'static str,
}

impl ConfigListSetting {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Parse the raw value into records, rejecting anything that is not a
    /// non-empty sequence of well-formed records.
    pub fn parse_records(&self, value: &Value) -> Result<Vec<PathRecord>, EncoderError> {
        let Value::Array(items) = value else {
            return Err(self.malformed(format!(
                "expected a list of records, found {}",
                json_type_name(value)
            )));
        };
        if items.is_empty() {
            return Err(self.malformed("the list of records is empty"));
        }

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let record: PathRecord = serde_json::from_value(item.clone())
                    .map_err(|e| self.malformed(format!("record {}: {}", index, e)))?;
                if record.path.is_empty() {
                    return Err(self.malformed(format!("record {}: path is empty", index)));
                }
                Ok(record)
            })
            .collect()
    }

    /// Validate every record and every referenced value.
    ///
    /// A setting may be written at most once per path.
    pub fn validate_value(
        &self,
        value: &Value,
        owned: &SettingTable,
    ) -> Result<Vec<PathRecord>, EncoderError> {
        let records = self.parse_records(value)?;
        let mut written = BTreeSet::new();
        for record in &records {
            for (name, raw) in &record.values {
                let setting = self.referenced(name, owned)?;
                let Some(value) = unwrap_envelope(raw) else {
                    continue;
                };
                setting.validate_value(value)?;
                if !written.insert((record.path.clone(), name.clone())) {
                    return Err(self.malformed(format!(
                        "setting \"{}\" is written more than once at path \"{}\"",
                        name, record.path
                    )));
                }
            }
        }
        Ok(records)
    }

    /// `(path, setting name)` of every property `value` writes.
    pub fn write_targets(
        &self,
        value: &Value,
        owned: &SettingTable,
    ) -> Result<Vec<(String, String)>, EncoderError> {
        let records = self.validate_value(value, owned)?;
        Ok(records
            .into_iter()
            .flat_map(|record| {
                let PathRecord { path, values } = record;
                values
                    .into_iter()
                    .filter(|(_, raw)| unwrap_envelope(raw).is_some())
                    .map(move |(name, _)| (path.clone(), name))
            })
            .collect())
    }

    /// Write statements for all records, without the module preamble.
    pub fn encode_statements(
        &self,
        value: &Value,
        owned: &SettingTable,
    ) -> Result<String, EncoderError> {
        let records = self.validate_value(value, owned)?;
        let mut out = String::new();
        for record in &records {
            for (name, raw) in &record.values {
                let Some(value) = unwrap_envelope(raw) else {
                    continue;
                };
                let setting = self.referenced(name, owned)?;
                out.push_str(&setting.encode_option(&record.path, value)?);
            }
        }
        Ok(out)
    }

    /// Self-contained write block: the preamble is emitted once, and only
    /// when at least one statement follows.
    pub fn encode_option(&self, value: &Value, owned: &SettingTable) -> Result<String, EncoderError> {
        let statements = self.encode_statements(value, owned)?;
        if statements.is_empty() {
            return Ok(statements);
        }
        Ok(format!("{}{}", IMPORT_WEB_ADMINISTRATION, statements))
    }

    /// Recover the records from a snapshot or a previously applied script.
    ///
    /// Every owned web-config setting whose filter was observed at a path is
    /// decoded for that path. Paths that yield no values are dropped.
    pub fn decode_option(
        &self,
        source: &DecodeSource,
        owned: &SettingTable,
    ) -> Result<Value, EncoderError> {
        let settings = web_config_settings(owned);
        let mut records = Vec::new();

        match source {
            DecodeSource::Structured(data) => {
                let Some(section) = data.get(WEB_CONFIG_SECTION) else {
                    return Ok(Value::Array(records));
                };
                let paths = section.as_object().ok_or_else(|| {
                    EncoderError::runtime_decode(
                        self.name,
                        section,
                        "WebConfig section must be a dictionary of paths",
                    )
                })?;
                for (path, filters) in paths {
                    let filters = filters.as_object().ok_or_else(|| {
                        EncoderError::runtime_decode(
                            self.name,
                            filters,
                            format!("Path \"{}\" must hold a dictionary of filters", path),
                        )
                    })?;
                    let mut values = Map::new();
                    for (filter, block) in filters {
                        // Get-WebConfiguration yields null for a section that does not exist
                        let Some(block) = block.as_object() else {
                            continue;
                        };
                        for setting in settings.iter().filter(|s| s.filter() == filter) {
                            let value = setting.decode_section(block)?;
                            values.insert(setting.name().to_string(), value.to_json());
                        }
                    }
                    push_record(&mut records, path, values);
                }
            }
            DecodeSource::ScriptText(_) => {
                for (path, filters) in observed_paths(source) {
                    let mut values = Map::new();
                    let observed = settings
                        .iter()
                        .filter(|s| filters.iter().any(|f| f == s.filter()));
                    for setting in observed {
                        let value = setting.decode_option(&path, source)?;
                        values.insert(setting.name().to_string(), value.to_json());
                    }
                    push_record(&mut records, &path, values);
                }
            }
        }

        Ok(Value::Array(records))
    }

    /// Paths to read, taken from this setting's value in `adjust`.
    ///
    /// With no configured paths the default configuration path is read.
    pub fn described_paths(&self, adjust: Option<&Value>) -> Result<Vec<String>, EncoderError> {
        let configured = adjust
            .and_then(|a| a.get(self.name))
            .and_then(unwrap_envelope);
        let mut paths: Vec<String> = Vec::new();
        let records = match configured {
            None => Vec::new(),
            Some(Value::Array(items)) if items.is_empty() => Vec::new(),
            Some(value) => self.parse_records(value)?,
        };
        for record in records {
            if !paths.contains(&record.path) {
                paths.push(record.path);
            }
        }
        if paths.is_empty() {
            paths.push(DEFAULT_WEB_CONFIG_PATH.to_string());
        }
        Ok(paths)
    }

    /// Queue one read per `(path, filter)` pair in `script`.
    pub fn encode_describe(
        &self,
        adjust: Option<&Value>,
        owned: &SettingTable,
        script: &mut DescribeScript,
    ) -> Result<(), EncoderError> {
        let settings = web_config_settings(owned);
        for path in self.described_paths(adjust)? {
            for setting in &settings {
                script.read_web_config(&path, setting.filter());
            }
        }
        Ok(())
    }

    pub fn describe(
        &self,
        adjust: Option<&Value>,
        owned: &SettingTable,
    ) -> Result<SettingDescriptor, EncoderError> {
        let settings: BTreeMap<String, SettingDescriptor> = web_config_settings(owned)
            .into_iter()
            .map(|s| (s.name().to_string(), s.describe()))
            .collect();

        let paths = match adjust {
            Some(_) => Some(
                self.described_paths(adjust)?
                    .into_iter()
                    .map(|path| (path, settings.clone()))
                    .collect(),
            ),
            None => None,
        };

        Ok(SettingDescriptor::ConfigList(ConfigListDescriptor {
            settings,
            paths,
        }))
    }

    fn referenced<'a>(
        &self,
        name: &str,
        owned: &'a SettingTable,
    ) -> Result<&'a WebConfigSetting, EncoderError> {
        match owned.get(name) {
            Some(Setting::WebConfig(setting)) => Ok(setting),
            Some(other) => Err(self.malformed(format!(
                "setting \"{}\" is a {} setting and cannot be scoped by path",
                name,
                other.kind()
            ))),
            None => Err(self.malformed(format!(
                "setting \"{}\" is not configured in this encoder",
                name
            ))),
        }
    }

    fn malformed(&self, message: impl std::fmt::Display) -> EncoderError {
        EncoderError::EncoderRuntime(format!("Invalid value for {}: {}", self.name, message))
    }
}

fn web_config_settings(owned: &SettingTable) -> Vec<&WebConfigSetting> {
    owned
        .values()
        .filter_map(|s| match s {
            Setting::WebConfig(w) => Some(w),
            _ => None,
        })
        .collect()
}

/// Distinct paths of all web-config assignments in a script, with the
/// filters written at each, in first-seen order.
fn observed_paths(source: &DecodeSource) -> Vec<(String, Vec<String>)> {
    let DecodeSource::ScriptText(script) = source else {
        return Vec::new();
    };
    let mut paths: Vec<(String, Vec<String>)> = Vec::new();
    for assignment in scanner::assignments(script) {
        let scanner::Assignment::WebConfig { filter, path, .. } = assignment else {
            continue;
        };
        match paths.iter_mut().find(|(p, _)| *p == path) {
            Some((_, filters)) => {
                if !filters.contains(&filter) {
                    filters.push(filter);
                }
            }
            None => paths.push((path, vec![filter])),
        }
    }
    paths
}

fn push_record(records: &mut Vec<Value>, path: &str, values: Map<String, Value>) {
    if !values.is_empty() {
        records.push(json!({ "path": path, "values": values }));
    }
}
