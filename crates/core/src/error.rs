//! Error types for the core crate
//!
//! Two failure domains live here:
//! - [`StoreError`]: the host ledger refused or failed an operation
//! - [`CodecError`]: stored bytes are not a marble

use thiserror::Error;

/// Failure reported by a [`Store`](crate::Store) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store cannot serve requests right now
    #[error("store unavailable: {reason}")]
    Unavailable {
        /// Reason given by the backend
        reason: String,
    },

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other backend failure
    #[error("store error: {reason}")]
    Other {
        /// Reason given by the backend
        reason: String,
    },
}

impl StoreError {
    /// Shorthand for [`StoreError::Other`].
    pub fn other(reason: impl Into<String>) -> Self {
        StoreError::Other {
            reason: reason.into(),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failure decoding stored bytes into a [`Marble`](crate::Marble).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Bytes are not well-formed JSON of the expected shape
    #[error("malformed marble: {0}")]
    Malformed(String),

    /// A required field is absent (strict decoding only)
    #[error("missing field `{0}`")]
    MissingField(String),

    /// `objectType` does not identify a marble (strict decoding only)
    #[error("unexpected objectType: expected \"Marble\", got {0:?}")]
    WrongObjectType(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        // serde reports missing fields as a data error; keep the field name
        // so strict decoding failures read cleanly.
        let msg = e.to_string();
        if let Some(rest) = msg.strip_prefix("missing field `") {
            if let Some(end) = rest.find('`') {
                return CodecError::MissingField(rest[..end].to_string());
            }
        }
        CodecError::Malformed(msg)
    }
}
