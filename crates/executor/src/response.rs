//! Host-facing invocation result.

use crate::{Error, Output, Result};

/// Outcome of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The operation completed
    Success,
    /// The operation failed; state is unchanged by the failing step
    Failure,
}

impl Status {
    /// Numeric status in the host ledger's convention (200 OK, 500 error).
    pub fn code(self) -> u16 {
        match self {
            Status::Success => 200,
            Status::Failure => 500,
        }
    }
}

/// What an invocation hands back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Success or failure
    pub status: Status,
    /// Operation payload, if any
    pub payload: Option<Vec<u8>>,
    /// Human-readable message; empty on success
    pub message: String,
    /// Canonical error kind on failure (see [`Error::code`])
    pub error_code: Option<&'static str>,
}

impl Response {
    /// Successful response carrying `payload`.
    pub fn success(payload: Option<Vec<u8>>) -> Self {
        Self {
            status: Status::Success,
            payload,
            message: String::new(),
            error_code: None,
        }
    }

    /// Failed response describing `error`.
    pub fn failure(error: &Error) -> Self {
        Self {
            status: Status::Failure,
            payload: None,
            message: format!("{}: {}", error.code(), error),
            error_code: Some(error.code()),
        }
    }

    /// True if the invocation succeeded.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Payload bytes, or an empty slice when there is none.
    pub fn payload_bytes(&self) -> &[u8] {
        self.payload.as_deref().unwrap_or_default()
    }
}

impl From<Result<Output>> for Response {
    fn from(result: Result<Output>) -> Self {
        match result {
            Ok(output) => Response::success(output.into_payload()),
            Err(e) => Response::failure(&e),
        }
    }
}
