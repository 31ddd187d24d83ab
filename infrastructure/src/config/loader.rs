//! Configuration file loader with multi-source merging

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use winconf_domain::EncoderConfig;

/// Prefix of environment variables overriding encoder keys, e.g. `WINCONF_ENCODER_EXPECTED_TYPE`
pub const ENV_PREFIX: &str = "WINCONF_ENCODER_";

/// Encoder keys the environment may override; other prefixed variables are ignored.
pub const ENV_KEYS: &[&str] = &["name", "before", "after", "expected_type"];

/// Errors from reading configuration and input files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Figment(#[from] Box<figment::Error>),
}

/// File format, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// `.json` is JSON; anything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Configuration loader that handles format detection and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the encoder section from `path`.
    ///
    /// `section` is a dotted key locating the encoder section inside a larger
    /// document; without it the whole document is the encoder section.
    pub fn load(path: &Path, section: Option<&str>) -> Result<EncoderConfig, LoadError> {
        let file = Self::file_figment(path)?;
        let file = match section {
            Some(section) => file.focus(section),
            None => file,
        };

        let config: EncoderConfig = Figment::new()
            .merge(Serialized::defaults(EncoderConfig::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS))
            .extract()
            .map_err(Box::new)?;

        debug!(
            "Loaded encoder \"{}\" with {} settings from {}",
            config.name,
            config.settings.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse a whole TOML or JSON document into a JSON value.
    pub fn load_document(path: &Path) -> Result<Value, LoadError> {
        let value = Self::file_figment(path)?.extract().map_err(Box::new)?;
        Ok(value)
    }

    fn file_figment(path: &Path) -> Result<Figment, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        let figment = match ConfigFormat::from_path(path) {
            ConfigFormat::Toml => Figment::from(Toml::file(path)),
            ConfigFormat::Json => Figment::from(Json::file(path)),
        };
        Ok(figment)
    }
}
