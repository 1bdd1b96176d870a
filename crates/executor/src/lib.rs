//! Command execution layer for the marbles contract
//!
//! The host calls [`Executor::invoke`] with an operation name and string
//! arguments and gets a [`Response`] back. Rust callers can use the typed
//! [`Executor::execute`] with a [`Command`] instead.
//!
//! | Name | Arguments | Effect |
//! |------|-----------|--------|
//! | `read` | key | raw stored bytes (empty if absent) |
//! | `addMarble` | key, color, size, owner | write marble, overwriting |
//! | `changeOwner` | key, owner | rewrite owner of an existing marble |
//! | `delete` | key | remove key (absent is fine) |
//! | `initMarbles` | - | write `MARBLE0`..`MARBLE9` |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod command;
mod config;
mod error;
mod executor;
pub mod handlers;
mod registry;
mod response;

pub use command::{Command, Output};
pub use config::ExecutorConfig;
pub use error::{Error, Result};
pub use executor::Executor;
pub use registry::{Handler, Registry, RegistryBuilder, STANDARD_OPERATIONS};
pub use response::{Response, Status};

pub use marbles_core::{DecodePolicy, Marble, Store};
