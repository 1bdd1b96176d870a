//! The marble record
//!
//! A marble is the only record type the contract manages. Field names and
//! order are part of the wire contract: `objectType`, `color`, `size`, `owner`.

use serde::{Deserialize, Serialize};

/// Fixed `objectType` tag carried by every marble.
pub const MARBLE_OBJECT_TYPE: &str = "Marble";

/// A marble held in the ledger.
///
/// Serde field order matches declaration order, so [`Marble`] always
/// serializes with keys in the canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marble {
    /// Record type tag, always [`MARBLE_OBJECT_TYPE`] for marbles we create
    #[serde(rename = "objectType")]
    pub object_type: String,
    /// Free-form color
    pub color: String,
    /// Size; non-negative by convention but not enforced
    pub size: i64,
    /// Current holder
    pub owner: String,
}

impl Marble {
    /// Create a marble with the fixed `objectType` tag.
    pub fn new(color: impl Into<String>, size: i64, owner: impl Into<String>) -> Self {
        Self {
            object_type: MARBLE_OBJECT_TYPE.to_string(),
            color: color.into(),
            size,
            owner: owner.into(),
        }
    }

    /// Return a copy of this marble held by `owner`. Every other field is kept.
    pub fn with_owner(self, owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..self
        }
    }
}

/// Permissive view of a stored marble: absent fields take their zero value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct LenientMarble {
    #[serde(rename = "objectType")]
    pub object_type: String,
    pub color: String,
    pub size: i64,
    pub owner: String,
}

impl From<LenientMarble> for Marble {
    fn from(m: LenientMarble) -> Self {
        Self {
            object_type: m.object_type,
            color: m.color,
            size: m.size,
            owner: m.owner,
        }
    }
}
