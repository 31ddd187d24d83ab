//! Encode use case.
//!
//! Turns requested setting values into a write script. The output also lists
//! the setting names the encoder considered, so the caller can tell which
//! settings the script covers.

use crate::ports::encoder_config_source::EncoderConfigSource;
use crate::use_cases::shared::{EncodeServiceError, load_encoder};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, warn};
use winconf_domain::{EncodedScript, EncoderError, ExpectedType};

/// Input for the [`EncodeSettingsUseCase`].
#[derive(Debug, Clone, Default)]
pub struct EncodeInput {
    /// `{setting: {"value": x}}` or `{setting: x}`
    pub values: Map<String, Value>,
    /// Output type requested by the driver
    pub expected_type: Option<ExpectedType>,
    /// Adjust driver configuration; expands the config-list paths
    pub adjust: Option<Value>,
}

impl EncodeInput {
    pub fn new(values: Map<String, Value>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn with_expected_type(mut self, expected_type: ExpectedType) -> Self {
        self.expected_type = Some(expected_type);
        self
    }

    pub fn with_adjust(mut self, adjust: Value) -> Self {
        self.adjust = Some(adjust);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EncodeOutput {
    pub script: EncodedScript,
    /// Every setting name the encoder considered
    pub settings: BTreeSet<String>,
}

pub struct EncodeSettingsUseCase {
    source: Arc<dyn EncoderConfigSource>,
}

impl EncodeSettingsUseCase {
    pub fn new(source: Arc<dyn EncoderConfigSource>) -> Self {
        Self { source }
    }

    pub fn execute(&self, input: EncodeInput) -> Result<EncodeOutput, EncodeServiceError> {
        let encoder = load_encoder(self.source.as_ref())?;

        if let (Some(config), Some(driver)) = (encoder.expected_type(), input.expected_type) {
            return Err(EncodeServiceError::ConflictingExpectedType { config, driver });
        }

        let settings: BTreeSet<String> = encoder
            .describe(input.adjust.as_ref())?
            .into_keys()
            .collect();

        let requested = input.values.len();
        let script = encoder
            .encode_multi(input.values, input.expected_type)
            .inspect_err(|e| {
                if let EncoderError::EncoderRuntime(message) = e {
                    warn!("Rejected encode request: {}", message);
                }
            })?;

        info!(
            "Encoded {} requested values into {} statements",
            requested,
            script.statement_count()
        );
        Ok(EncodeOutput { script, settings })
    }
}
