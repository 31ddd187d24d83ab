//! Static setting descriptions returned by `describe`

use crate::core::number::Number;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Domain tag of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKind {
    Range,
    Bool,
    ConfigList,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingKind::Range => write!(f, "range"),
            SettingKind::Bool => write!(f, "bool"),
            SettingKind::ConfigList => write!(f, "config_list"),
        }
    }
}

/// Description of one setting's domain.
///
/// Serializes with a `kind` tag:
///
/// ```json
/// {"kind": "range", "min": 10, "max": 4294967295, "step": 1, "unit": "seconds",
///  "default": 120, "system_default": 120}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SettingDescriptor {
    Range(RangeDescriptor),
    Bool(RangeDescriptor),
    ConfigList(ConfigListDescriptor),
}

impl SettingDescriptor {
    pub fn kind(&self) -> SettingKind {
        match self {
            Self::Range(_) => SettingKind::Range,
            Self::Bool(_) => SettingKind::Bool,
            Self::ConfigList(_) => SettingKind::ConfigList,
        }
    }

    pub fn as_range(&self) -> Option<&RangeDescriptor> {
        match self {
            Self::Range(d) | Self::Bool(d) => Some(d),
            Self::ConfigList(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeDescriptor {
    pub min: Number,
    pub max: Number,
    pub step: Number,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unit: String,
    pub default: Number,
    pub system_default: Number,
}

/// Description of a config-list setting: the settings a record may carry and,
/// when external context is given, the same set expanded for every configured path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigListDescriptor {
    pub settings: BTreeMap<String, SettingDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<BTreeMap<String, BTreeMap<String, SettingDescriptor>>>,
}
