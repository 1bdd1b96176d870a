//! Executor error type.
//!
//! Every failure an invocation can produce. None of them are fatal: the
//! executor turns each into a failed [`Response`](crate::Response) and
//! stays usable for the next invocation.

use marbles_core::{CodecError, StoreError};
use thiserror::Error;

/// Errors returned by operation handlers and the dispatcher.
#[derive(Debug, Error)]
pub enum Error {
    /// No handler is registered under this name
    #[error("unknown operation: {name:?}")]
    UnknownOperation {
        /// The name that was requested
        name: String,
    },

    /// Too few arguments, or an argument that cannot be parsed
    #[error("invalid arguments for {operation}: {reason}")]
    InvalidArguments {
        /// Operation being invoked
        operation: String,
        /// What was wrong
        reason: String,
    },

    /// The operation needs an existing marble and there is none
    #[error("marble not found: {key}")]
    NotFound {
        /// Key that was looked up
        key: String,
    },

    /// Stored bytes are not a marble
    #[error("cannot decode marble at {key}: {source}")]
    Decode {
        /// Key the bytes were read from
        key: String,
        /// Codec failure
        #[source]
        source: CodecError,
    },

    /// The ledger store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A versioned write lost a race with another writer
    #[error("conflicting write on {key}")]
    Conflict {
        /// Key that changed underneath us
        key: String,
    },

    /// Two handlers were registered under one name
    #[error("operation registered twice: {name}")]
    DuplicateOperation {
        /// The duplicated name
        name: String,
    },

    /// Invariant violation
    #[error("internal error: {reason}")]
    Internal {
        /// Description
        reason: String,
    },
}

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Canonical error kind name, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnknownOperation { .. } => "UnknownOperation",
            Error::InvalidArguments { .. } => "InvalidArguments",
            Error::NotFound { .. } => "NotFound",
            Error::Decode { .. } => "DecodeError",
            Error::Store(_) => "StoreError",
            Error::Conflict { .. } => "Conflict",
            Error::DuplicateOperation { .. } => "DuplicateOperation",
            Error::Internal { .. } => "Internal",
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if retrying with fresh data may succeed.
    ///
    /// The executor never retries on its own; this is a hint for the host.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Conflict { .. })
    }

    pub(crate) fn invalid_arguments(operation: &str, reason: impl Into<String>) -> Self {
        Error::InvalidArguments {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}
