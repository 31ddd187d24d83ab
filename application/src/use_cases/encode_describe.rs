//! Encode-describe use case.
//!
//! Produces the read script whose JSON output the decode use case consumes.

use crate::ports::encoder_config_source::EncoderConfigSource;
use crate::use_cases::shared::{EncodeServiceError, load_encoder};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Input for the [`EncodeDescribeUseCase`].
#[derive(Debug, Clone, Default)]
pub struct EncodeDescribeInput {
    /// Adjust driver configuration; its config-list value selects the paths to read
    pub adjust: Option<Value>,
}

pub struct EncodeDescribeUseCase {
    source: Arc<dyn EncoderConfigSource>,
}

impl EncodeDescribeUseCase {
    pub fn new(source: Arc<dyn EncoderConfigSource>) -> Self {
        Self { source }
    }

    pub fn execute(&self, input: EncodeDescribeInput) -> Result<String, EncodeServiceError> {
        let encoder = load_encoder(self.source.as_ref())?;
        let script = encoder.encode_describe(input.adjust.as_ref())?;
        info!("Built read script with {} lines", script.lines().count());
        Ok(script)
    }
}
