//! Operation handlers.
//!
//! Each operation has two entry points:
//! - a typed function (`read`, `add_marble`, ...) used by [`Executor::execute`](crate::Executor::execute)
//! - an `*_args` adapter that checks arity, parses the string arguments and
//!   calls the typed function; these are what the [`Registry`](crate::Registry) maps names to
//!
//! Extra trailing arguments are ignored.

pub mod marble;
pub mod seed;

use std::sync::Arc;

use marbles_core::{MarbleCodec, Store};

use crate::config::ExecutorConfig;
use crate::{Error, Result};

/// Everything a handler needs: the store and how to talk to it.
pub struct Context {
    /// Host ledger
    pub store: Arc<dyn Store>,
    /// Record codec
    pub codec: MarbleCodec,
    /// Use versioned writes for read-modify-write operations
    pub compare_and_swap: bool,
}

impl Context {
    /// Build a context over `store` using `config`.
    pub fn new(store: Arc<dyn Store>, config: &ExecutorConfig) -> Self {
        Self {
            store,
            codec: MarbleCodec::new(config.decode_policy),
            compare_and_swap: config.compare_and_swap,
        }
    }
}

/// Take the first `N` arguments, failing if fewer were supplied.
pub(crate) fn expect_args<'a, const N: usize>(
    operation: &str,
    args: &[&'a str],
) -> Result<[&'a str; N]> {
    if args.len() < N {
        return Err(Error::invalid_arguments(
            operation,
            format!("expected {} argument(s), got {}", N, args.len()),
        ));
    }
    Ok(std::array::from_fn(|i| args[i]))
}

/// Parse a decimal marble size.
pub(crate) fn parse_size(operation: &str, raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|e| {
        Error::invalid_arguments(operation, format!("size {:?} is not an integer: {}", raw, e))
    })
}
