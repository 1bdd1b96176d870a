//! Storage layer for the marbles contract
//!
//! This crate provides [`MemoryStore`], an in-memory implementation of
//! [`marbles_core::Store`] used for ephemeral deployments, tests and
//! benchmarks. Production hosts supply their own ledger-backed store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;

pub use memory::MemoryStore;
