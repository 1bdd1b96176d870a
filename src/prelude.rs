//! Convenient imports for the marbles contract.
//!
//! ```ignore
//! use marbles::prelude::*;
//!
//! let contract = Marbles::ephemeral();
//! contract.init_marbles()?;
//! ```

// Main entry point
pub use crate::contract::{Marbles, MarblesBuilder};

// Error handling
pub use marbles_executor::{Error, Result};

// Invocation surface
pub use marbles_executor::{Command, Executor, ExecutorConfig, Output, Response, Status};

// Record and store
pub use marbles_core::{DecodePolicy, Marble, MarbleCodec, Store, Versioned};
pub use marbles_storage::MemoryStore;
