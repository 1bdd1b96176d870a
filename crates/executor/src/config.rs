//! Executor configuration.

use marbles_core::DecodePolicy;
use serde::Deserialize;

/// Tunables for an [`Executor`](crate::Executor).
///
/// Deserializable so a host can embed it in its own configuration file.
/// Missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// How stored marbles are decoded
    pub decode_policy: DecodePolicy,
    /// Use the store's versioned writes for `changeOwner` when available
    pub compare_and_swap: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            decode_policy: DecodePolicy::Permissive,
            compare_and_swap: true,
        }
    }
}
