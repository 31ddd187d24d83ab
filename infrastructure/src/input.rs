//! Input file reading.
//!
//! Values, decode data and adjust configuration are read from a path, or
//! from stdin when the path is `-`.

use crate::config::{ConfigFormat, ConfigLoader, LoadError};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Path argument meaning "read stdin"
pub const STDIN_MARKER: &str = "-";

/// Read raw text from a file or stdin.
pub fn read_text(location: &str) -> Result<String, LoadError> {
    if location == STDIN_MARKER {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| LoadError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
        debug!("Read {} bytes from stdin", text.len());
        return Ok(text);
    }

    let path = Path::new(location);
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: location.to_string(),
        source,
    })?;
    debug!("Read {} bytes from {}", text.len(), location);
    Ok(text)
}

/// Read a structured document: JSON from stdin, or a TOML / JSON file.
pub fn read_document(location: &str) -> Result<Value, LoadError> {
    if location == STDIN_MARKER {
        let text = read_text(location)?;
        return serde_json::from_str(&text).map_err(|e| LoadError::Io {
            path: "<stdin>".to_string(),
            source: e.into(),
        });
    }
    let path = Path::new(location);
    debug!("Reading {:?} document {}", ConfigFormat::from_path(path), location);
    ConfigLoader::load_document(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("applied.ps1");
        std::fs::write(&path, "Import-Module WebAdministration\n").unwrap();
        let text = read_text(path.to_str().unwrap()).unwrap();
        assert_eq!(text, "Import-Module WebAdministration\n");
    }

    #[test]
    fn test_read_text_missing() {
        let err = read_text("/definitely/not/here.ps1").unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_read_document_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.json");
        std::fs::write(&path, r#"{"UriEnableCache": {"value": 0}}"#).unwrap();
        let value = read_document(path.to_str().unwrap()).unwrap();
        assert_eq!(value["UriEnableCache"]["value"], 0);
    }
}
