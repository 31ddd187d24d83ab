//! Describe use case.
//!
//! Returns each owned setting's domain metadata. When decode data is supplied,
//! every descriptor also carries the setting's current `value`.

use crate::ports::encoder_config_source::EncoderConfigSource;
use crate::use_cases::shared::{EncodeServiceError, load_encoder};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};
use winconf_domain::SettingDescriptor;

/// Input for the [`DescribeSettingsUseCase`].
#[derive(Debug, Clone, Default)]
pub struct DescribeInput {
    /// Describe output or a previously applied script
    pub data: Option<Value>,
    pub adjust: Option<Value>,
}

/// A setting descriptor, optionally merged with its current value.
///
/// Serializes flat: `{"kind": "range", "min": 10, ..., "value": 120}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescribedSetting {
    #[serde(flatten)]
    pub descriptor: SettingDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

pub struct DescribeSettingsUseCase {
    source: Arc<dyn EncoderConfigSource>,
}

impl DescribeSettingsUseCase {
    pub fn new(source: Arc<dyn EncoderConfigSource>) -> Self {
        Self { source }
    }

    pub fn execute(
        &self,
        input: DescribeInput,
    ) -> Result<BTreeMap<String, DescribedSetting>, EncodeServiceError> {
        let encoder = load_encoder(self.source.as_ref())?;
        let descriptors = encoder.describe(input.adjust.as_ref())?;

        let mut current = match input.data {
            Some(data) => {
                debug!("Decoding current values for describe");
                encoder.decode_multi(data)?
            }
            None => BTreeMap::new(),
        };

        info!("Described {} settings", descriptors.len());
        Ok(descriptors
            .into_iter()
            .map(|(name, descriptor)| {
                let value = current.remove(&name);
                (name, DescribedSetting { descriptor, value })
            })
            .collect())
    }
}
