//! Typed commands and their outputs.
//!
//! [`Command`] is the typed form of an invocation. The string entry point
//! ([`Executor::invoke`](crate::Executor::invoke)) and the typed one
//! ([`Executor::execute`](crate::Executor::execute)) reach the same handlers.

/// A single contract operation with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Return the raw bytes stored under `key`
    Read {
        /// Ledger key
        key: String,
    },
    /// Store a new marble under `key`, replacing anything there
    AddMarble {
        /// Ledger key
        key: String,
        /// Marble color
        color: String,
        /// Marble size
        size: i64,
        /// Initial owner
        owner: String,
    },
    /// Hand an existing marble to a new owner
    ChangeOwner {
        /// Ledger key
        key: String,
        /// New owner
        owner: String,
    },
    /// Remove `key` from the ledger
    Delete {
        /// Ledger key
        key: String,
    },
    /// Write the fixed seed marbles `MARBLE0`..`MARBLE9`
    InitMarbles,
}

impl Command {
    /// Invocation name of this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Read { .. } => "read",
            Command::AddMarble { .. } => "addMarble",
            Command::ChangeOwner { .. } => "changeOwner",
            Command::Delete { .. } => "delete",
            Command::InitMarbles => "initMarbles",
        }
    }
}

/// Successful result of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// No payload
    Unit,
    /// Raw stored bytes, `None` if the key was absent
    Maybe(Option<Vec<u8>>),
}

impl Output {
    /// Payload carried back to the host.
    pub fn into_payload(self) -> Option<Vec<u8>> {
        match self {
            Output::Unit => None,
            Output::Maybe(bytes) => bytes,
        }
    }
}
