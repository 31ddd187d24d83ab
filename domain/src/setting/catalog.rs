//! Catalog of supported settings.
//!
//! Setting identifiers resolve against this closed, static table when an
//! encoder is built. An identifier missing here is a configuration error.

use super::descriptor::SettingKind;
use super::range::RangePolicy;
use crate::codec::{BooleanCodec, IntegerCodec, ValueCodec};
use crate::core::number::Number;

/// Registry key holding the HTTP.sys kernel cache parameters.
pub const HTTP_PARAMETERS_PATH: &str = r"HKLM:\System\CurrentControlSet\Services\Http\Parameters";

/// IIS configuration section of the output cache.
pub const CACHING_FILTER: &str = "system.webServer/caching";

/// Configuration path used when a web-config setting is evaluated outside a config list.
pub const DEFAULT_WEB_CONFIG_PATH: &str = "MACHINE/WEBROOT/APPHOST";

/// Largest value of a registry DWORD.
const DWORD_MAX: i64 = 0xFFFF_FFFF;

/// Static description shared by every range-backed catalog entry.
#[derive(Debug)]
pub struct RangeDefinition {
    pub name: &'static str,
    pub kind: SettingKind,
    pub codec: &'static dyn ValueCodec,
    pub unit: &'static str,
    pub policy: RangePolicy,
    /// Value in effect while the key or property has never been written
    pub system_default: Number,
}

/// One catalog entry.
#[derive(Debug)]
pub enum SettingDefinition {
    /// Flat registry value under a fixed key
    Registry {
        base: RangeDefinition,
        path: &'static str,
    },
    /// IIS configuration property; its path is supplied per call
    WebConfig {
        base: RangeDefinition,
        filter: &'static str,
        /// Property name on the IIS side when it differs from the setting name
        name_override: Option<&'static str>,
    },
    /// Path-scoped collection of web-config values
    ConfigList { name: &'static str },
}

impl SettingDefinition {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Registry { base, .. } | Self::WebConfig { base, .. } => base.name,
            Self::ConfigList { name } => name,
        }
    }

    pub fn kind(&self) -> SettingKind {
        match self {
            Self::Registry { base, .. } | Self::WebConfig { base, .. } => base.kind,
            Self::ConfigList { .. } => SettingKind::ConfigList,
        }
    }
}

/// All supported settings.
pub fn known_settings() -> &'static [SettingDefinition] {
    &KNOWN_SETTINGS
}

/// Look up a setting by its identifier.
pub fn lookup_setting(name: &str) -> Option<&'static SettingDefinition> {
    KNOWN_SETTINGS.iter().find(|s| s.name() == name)
}

static KNOWN_SETTINGS: [SettingDefinition; 7] = [
    // ==================== Registry (HTTP.sys) ====================
    SettingDefinition::Registry {
        base: RangeDefinition {
            name: "UriEnableCache",
            kind: SettingKind::Bool,
            codec: &IntegerCodec,
            unit: "",
            policy: RangePolicy::bounded(0, 1, 1).strict(),
            system_default: Number::Int(1),
        },
        path: HTTP_PARAMETERS_PATH,
    },
    SettingDefinition::Registry {
        base: RangeDefinition {
            name: "UriScavengerPeriod",
            kind: SettingKind::Range,
            codec: &IntegerCodec,
            unit: "seconds",
            policy: RangePolicy::bounded(10, DWORD_MAX, 1).strict(),
            system_default: Number::Int(120),
        },
        path: HTTP_PARAMETERS_PATH,
    },
    // ==================== Web configuration (IIS) ====================
    SettingDefinition::WebConfig {
        base: RangeDefinition {
            name: "WebConfigCacheEnabled",
            kind: SettingKind::Bool,
            codec: &BooleanCodec,
            unit: "",
            policy: RangePolicy::bounded(0, 1, 1).strict(),
            system_default: Number::Int(1),
        },
        filter: CACHING_FILTER,
        // "enabled" alone would be ambiguous among the encoder's settings
        name_override: Some("enabled"),
    },
    SettingDefinition::WebConfig {
        base: RangeDefinition {
            name: "WebConfigEnableKernelCache",
            kind: SettingKind::Bool,
            codec: &BooleanCodec,
            unit: "",
            policy: RangePolicy::bounded(0, 1, 1).strict(),
            system_default: Number::Int(1),
        },
        filter: CACHING_FILTER,
        name_override: Some("enableKernelCache"),
    },
    SettingDefinition::WebConfig {
        base: RangeDefinition {
            name: "WebConfigMaxResponseSize",
            kind: SettingKind::Range,
            codec: &IntegerCodec,
            unit: "bytes",
            policy: RangePolicy::bounded(0, DWORD_MAX, 1),
            system_default: Number::Int(262_144),
        },
        filter: CACHING_FILTER,
        name_override: Some("maxResponseSize"),
    },
    SettingDefinition::WebConfig {
        base: RangeDefinition {
            name: "WebConfigMaxCacheSize",
            kind: SettingKind::Range,
            codec: &IntegerCodec,
            unit: "megabytes",
            policy: RangePolicy::bounded(0, DWORD_MAX, 1),
            system_default: Number::Int(0),
        },
        filter: CACHING_FILTER,
        name_override: Some("maxCacheSize"),
    },
    // ==================== Aggregates ====================
    SettingDefinition::ConfigList { name: "WebConfig" },
];
