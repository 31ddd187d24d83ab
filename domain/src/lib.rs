//! Domain layer for winconf
//!
//! Pure logic for turning Windows web-server tunables into PowerShell and back.
//! No I/O and no logging happen here.
//!
//! # Core Concepts
//!
//! ## Settings
//!
//! A [`Setting`] is one named tunable with a validated numeric domain:
//!
//! - **Registry**: a value under a fixed registry key
//! - **WebConfig**: an IIS configuration property, scoped by a path given per call
//! - **ConfigList**: a list of `{path, values}` records over the web-config settings
//!
//! ## Encoder
//!
//! An [`Encoder`] owns the settings of one static configuration and runs four
//! operations over them:
//!
//! - `describe`: static domain metadata
//! - `encode_multi`: runtime values to a write script
//! - `decode_multi`: a snapshot or a previously applied script back to values
//! - `encode_describe`: the read script whose JSON output `decode_multi` consumes

pub mod codec;
pub mod config;
pub mod core;
pub mod encoder;
pub mod script;
pub mod setting;
pub mod util;

// Re-export commonly used types
pub use codec::{BooleanCodec, IntegerCodec, ValueCodec};
pub use config::{EncoderConfig, ExpectedType};
pub use core::{
    error::{DecodeError, EncoderError},
    number::Number,
};
pub use encoder::{EncodedScript, Encoder};
pub use script::{DecodeSource, DescribeScript};
pub use setting::{
    Setting, SettingTable,
    catalog::{
        CACHING_FILTER, DEFAULT_WEB_CONFIG_PATH, HTTP_PARAMETERS_PATH, SettingDefinition,
        known_settings, lookup_setting,
    },
    config_list::PathRecord,
    descriptor::{ConfigListDescriptor, RangeDescriptor, SettingDescriptor, SettingKind},
    options::SettingOptions,
    range::{RangeDomain, RangePolicy},
    unwrap_envelope,
};
