//! # Marbles
//!
//! A ledger contract managing marbles: small records with a color, a size
//! and an owner, stored as canonical JSON in a host-supplied key-value
//! ledger.
//!
//! ## Quick Start
//!
//! ```ignore
//! use marbles::prelude::*;
//!
//! let contract = Marbles::ephemeral();
//!
//! // Host-style string invocation
//! let resp = contract.invoke("addMarble", &["M1", "pink", "6", "Tom"]);
//! assert!(resp.is_success());
//!
//! // Typed calls
//! contract.change_owner("M1", "Ann")?;
//! let bytes = contract.read("M1")?;
//! ```
//!
//! ## Crates
//!
//! - [`marbles_core`]: the [`Marble`] record, its codec and the [`Store`] trait
//! - [`marbles_storage`]: [`MemoryStore`], an in-memory ledger
//! - [`marbles_executor`]: dispatch, handlers and the [`Executor`]
//!
//! ## Concurrency
//!
//! The contract holds no locks. Concurrent `addMarble` or `initMarbles`
//! calls on one key end with the last writer's value. `changeOwner` is a
//! read-modify-write: against a store with versioned writes it fails with
//! a `Conflict` instead of overwriting a concurrent change; against a
//! plain store it is last-writer-wins and the host must serialize writers.

#![warn(missing_docs)]

mod contract;

pub mod prelude;

// Re-export main entry points
pub use contract::{Marbles, MarblesBuilder};

pub use marbles_core::{self, DecodePolicy, Marble, MarbleCodec, Store, StoreError};
pub use marbles_executor::{
    self, Command, Error, Executor, ExecutorConfig, Output, Registry, Response, Result, Status,
};
pub use marbles_storage::{self, MemoryStore};
