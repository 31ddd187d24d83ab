//! File-backed implementation of the encoder configuration port

use super::loader::ConfigLoader;
use std::path::PathBuf;
use winconf_application::{ConfigSourceError, EncoderConfigSource};
use winconf_domain::EncoderConfig;

/// Reads the encoder section from a file on every load.
#[derive(Debug, Clone)]
pub struct FileEncoderConfigSource {
    path: PathBuf,
    section: Option<String>,
}

impl FileEncoderConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            section: None,
        }
    }

    /// Focus on a dotted section of the file.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

impl EncoderConfigSource for FileEncoderConfigSource {
    fn load(&self) -> Result<EncoderConfig, ConfigSourceError> {
        ConfigLoader::load(&self.path, self.section.as_deref())
            .map_err(|e| ConfigSourceError::new(e.to_string()))
    }
}
