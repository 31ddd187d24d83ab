//! Decode input: a structured snapshot or raw script text.

use crate::core::error::EncoderError;
use crate::setting::options::json_type_name;
use serde_json::{Map, Value};

/// Where decoded setting values come from.
///
/// The structured form is the JSON printed by the describe script; the text
/// form is a write script previously produced by `encode_multi`.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeSource {
    Structured(Map<String, Value>),
    ScriptText(String),
}

impl DecodeSource {
    /// Disambiguate text input: a JSON object is structured, anything else is script text.
    pub fn detect(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Self::Structured(map),
            _ => Self::ScriptText(text.to_string()),
        }
    }

    /// Accept an already parsed input: an object, a string, or a list of script lines.
    pub fn from_value(data: Value) -> Result<Self, EncoderError> {
        match data {
            Value::Object(map) => Ok(Self::Structured(map)),
            Value::String(text) => Ok(Self::detect(&text)),
            Value::Array(lines) => {
                let mut text = String::new();
                for line in &lines {
                    let Value::String(line) = line else {
                        return Err(EncoderError::EncoderRuntime(format!(
                            "Script lines must be strings, found {}",
                            json_type_name(line)
                        )));
                    };
                    text.push_str(line);
                    text.push('\n');
                }
                Ok(Self::ScriptText(text))
            }
            other => Err(EncoderError::EncoderRuntime(format!(
                "Unrecognized data type passed to decode: {}. \
                 Supported: dictionary (loaded JSON), string (JSON or PowerShell script)",
                json_type_name(&other)
            ))),
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }
}

impl From<Map<String, Value>> for DecodeSource {
    fn from(map: Map<String, Value>) -> Self {
        Self::Structured(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_json_object() {
        let source = DecodeSource::detect(r#"{"WebConfig": {}}"#);
        assert!(source.is_structured());
    }

    #[test]
    fn test_detect_falls_back_to_script() {
        let text = "Set-ItemProperty -Path \"K\" -Name \"N\" -Value 1\n";
        assert_eq!(DecodeSource::detect(text), DecodeSource::ScriptText(text.to_string()));
    }

    #[test]
    fn test_detect_json_scalar_is_script() {
        assert!(!DecodeSource::detect("42").is_structured());
    }

    #[test]
    fn test_from_value_string_with_json() {
        let source = DecodeSource::from_value(json!(r#"{"a": 1}"#)).unwrap();
        assert_eq!(source, DecodeSource::Structured(json!({"a": 1}).as_object().unwrap().clone()));
    }

    #[test]
    fn test_from_value_lines() {
        let source = DecodeSource::from_value(json!(["line one", "line two"])).unwrap();
        assert_eq!(source, DecodeSource::ScriptText("line one\nline two\n".to_string()));
    }

    #[test]
    fn test_from_value_rejects_numbers() {
        let err = DecodeSource::from_value(json!(5)).unwrap_err();
        assert!(matches!(err, EncoderError::EncoderRuntime(_)));
        assert!(DecodeSource::from_value(json!([1])).is_err());
    }
}
