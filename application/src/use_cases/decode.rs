//! Decode use case.
//!
//! Reads current setting values from describe output or from a previously
//! applied write script. Text that parses as a JSON object is treated as
//! describe output; any other text is scanned as a script.

use crate::ports::encoder_config_source::EncoderConfigSource;
use crate::use_cases::shared::{EncodeServiceError, load_encoder};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};
use winconf_domain::DecodeSource;

/// Input for the [`DecodeSettingsUseCase`].
#[derive(Debug, Clone)]
pub struct DecodeInput {
    pub data: Value,
}

impl DecodeInput {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Raw text as read from a file or stdin.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            data: Value::String(text.into()),
        }
    }
}

pub struct DecodeSettingsUseCase {
    source: Arc<dyn EncoderConfigSource>,
}

impl DecodeSettingsUseCase {
    pub fn new(source: Arc<dyn EncoderConfigSource>) -> Self {
        Self { source }
    }

    pub fn execute(&self, input: DecodeInput) -> Result<BTreeMap<String, Value>, EncodeServiceError> {
        let encoder = load_encoder(self.source.as_ref())?;
        let source = DecodeSource::from_value(input.data)?;
        debug!(
            "Decoding from {}",
            if source.is_structured() {
                "structured describe output"
            } else {
                "script text"
            }
        );

        let decoded = encoder.decode_source(&source)?;
        info!("Decoded {} settings", decoded.len());
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::encoder_config_source::StaticConfigSource;
    use serde_json::json;
    use winconf_domain::EncoderConfig;

    fn use_case() -> DecodeSettingsUseCase {
        let config = EncoderConfig::new("dotnet")
            .with_setting("UriEnableCache", json!({}))
            .with_setting("UriScavengerPeriod", json!({}));
        DecodeSettingsUseCase::new(Arc::new(StaticConfigSource::new(config)))
    }

    #[test]
    fn test_decode_json_text() {
        let text = r#"{"HKLM:\\System\\CurrentControlSet\\Services\\Http\\Parameters": {"UriEnableCache": 0}}"#;
        let decoded = use_case().execute(DecodeInput::from_text(text)).unwrap();
        assert_eq!(decoded["UriEnableCache"], json!(0));
        assert_eq!(decoded["UriScavengerPeriod"], json!(120));
    }

    #[test]
    fn test_decode_script_text() {
        let text = "Set-ItemProperty -Path \"HKLM:\\System\\CurrentControlSet\\Services\\Http\\Parameters\" \
                    -Name \"UriScavengerPeriod\" -Value 30\n";
        let decoded = use_case().execute(DecodeInput::from_text(text)).unwrap();
        assert_eq!(decoded["UriScavengerPeriod"], json!(30));
        assert_eq!(decoded["UriEnableCache"], json!(1));
    }

    #[test]
    fn test_decode_rejects_numbers() {
        let err = use_case().execute(DecodeInput::new(json!(3))).unwrap_err();
        assert!(!err.is_config());
    }
}
