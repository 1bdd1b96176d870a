//! Core types for the marbles ledger contract
//!
//! This crate defines the foundational pieces every other crate builds on:
//! - [`Marble`]: the record stored in the ledger
//! - [`MarbleCodec`]: canonical JSON encoding with a configurable [`DecodePolicy`]
//! - [`Store`]: the key-value ledger abstraction supplied by the host
//! - [`StoreError`] / [`CodecError`]: failures surfaced by those seams

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod marble;
pub mod store;

pub use codec::{DecodePolicy, MarbleCodec};
pub use error::{CodecError, StoreError, StoreResult};
pub use marble::{Marble, MARBLE_OBJECT_TYPE};
pub use store::{Store, Versioned};
