//! Marbles Integration Test Suite
//!
//! Drives the contract through its host-facing entry points against the
//! in-memory store and a few purpose-built stores.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test marbles
//!
//! # Dispatch tests only
//! cargo test --test marbles dispatch::
//! ```

mod common;

mod concurrency;
mod dispatch;
mod store_failures;
