//! # Request Body Codec
//!
//! Decodes `{"tunables": [{"id": ..., "type": ..., "value": ...}, ...]}`
//! into typed descriptors. Decoding is all-or-nothing and never touches a
//! collection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tunable::{DecoderRegistry, TunableValue};

use super::errors::{AdminError, AdminResult};

/// One descriptor as it appears on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireDescriptor {
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: Value,
}

/// Request body as it appears on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireUpdateRequest {
    pub tunables: Vec<WireDescriptor>,
}

/// A descriptor whose value has been decoded for its declared type
#[derive(Debug, Clone, PartialEq)]
pub struct TunableDescriptor {
    pub id: String,
    pub type_name: String,
    pub value: TunableValue,
}

/// Decoded request body
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TunableUpdateRequest {
    descriptors: Vec<TunableDescriptor>,
}

impl TunableUpdateRequest {
    pub fn new(descriptors: Vec<TunableDescriptor>) -> Self {
        Self { descriptors }
    }

    pub fn descriptors(&self) -> &[TunableDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Parse and decode a raw request body
pub fn decode_request(body: &[u8], decoders: &DecoderRegistry) -> AdminResult<TunableUpdateRequest> {
    let wire: WireUpdateRequest =
        serde_json::from_slice(body).map_err(|e| AdminError::MalformedJson(e.to_string()))?;
    decode_descriptors(wire.tunables, decoders)
}

/// Decode already-parsed wire descriptors; the first bad entry fails the batch
pub fn decode_descriptors(
    wire: Vec<WireDescriptor>,
    decoders: &DecoderRegistry,
) -> AdminResult<TunableUpdateRequest> {
    let descriptors = wire
        .into_iter()
        .enumerate()
        .map(|(index, descriptor)| -> AdminResult<TunableDescriptor> {
            let value = decoders
                .decode(&descriptor.type_name, &descriptor.value)
                .map_err(|e| {
                    AdminError::MalformedJson(format!(
                        "tunables[{}] (id {:?}): {}",
                        index, descriptor.id, e
                    ))
                })?;

            Ok(TunableDescriptor {
                id: descriptor.id,
                type_name: descriptor.type_name,
                value,
            })
        })
        .collect::<AdminResult<Vec<TunableDescriptor>>>()?;

    Ok(TunableUpdateRequest::new(descriptors))
}
