//! Marble wire codec
//!
//! Encoding is canonical JSON: `{"objectType":..,"color":..,"size":<int>,"owner":..}`
//! with no whitespace. Decoding comes in two flavors, selected by
//! [`DecodePolicy`]:
//!
//! | Policy | Missing field | `objectType` != "Marble" | Bad JSON / wrong type |
//! |--------|---------------|--------------------------|-----------------------|
//! | `Permissive` | zero value | accepted | error |
//! | `Strict` | error | error | error |
//!
//! Unknown fields are ignored under both policies.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::marble::{LenientMarble, Marble, MARBLE_OBJECT_TYPE};

/// How tolerant decoding is of incomplete records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Missing fields decode to their zero value
    #[default]
    Permissive,
    /// Every field must be present and the record must be tagged "Marble"
    Strict,
}

/// Encodes and decodes marbles to and from their stored bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarbleCodec {
    policy: DecodePolicy,
}

impl MarbleCodec {
    /// Create a codec with the given decode policy.
    pub fn new(policy: DecodePolicy) -> Self {
        Self { policy }
    }

    /// Codec that rejects incomplete records.
    pub fn strict() -> Self {
        Self::new(DecodePolicy::Strict)
    }

    /// The decode policy in effect.
    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }

    /// Encode a marble to its canonical bytes.
    pub fn encode(&self, marble: &Marble) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(marble)?)
    }

    /// Decode stored bytes into a marble according to the codec's policy.
    pub fn decode(&self, bytes: &[u8]) -> Result<Marble, CodecError> {
        match self.policy {
            DecodePolicy::Permissive => {
                let lenient: LenientMarble = serde_json::from_slice(bytes)?;
                Ok(lenient.into())
            }
            DecodePolicy::Strict => {
                let marble: Marble = serde_json::from_slice(bytes)?;
                if marble.object_type != MARBLE_OBJECT_TYPE {
                    return Err(CodecError::WrongObjectType(marble.object_type));
                }
                Ok(marble)
            }
        }
    }
}
