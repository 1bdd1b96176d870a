//! Operation name → handler table.
//!
//! Names match exactly and case-sensitively. A registry is validated when
//! it is built: registering one name twice is an error, not a silent
//! override.

use rustc_hash::FxHashMap;
use tracing::error;

use crate::handlers::{marble, seed, Context};
use crate::{Error, Output, Result};

/// A handler takes the execution context and the raw string arguments.
pub type Handler = fn(&Context, &[&str]) -> Result<Output>;

/// The contract's operations as `(invocation name, handler)`.
pub const STANDARD_OPERATIONS: [(&str, Handler); 5] = [
    ("read", marble::read_args),
    ("addMarble", marble::add_marble_args),
    ("changeOwner", marble::change_owner_args),
    ("delete", marble::delete_args),
    ("initMarbles", seed::init_marbles_args),
];

/// Validated dispatch table.
#[derive(Clone)]
pub struct Registry {
    handlers: FxHashMap<&'static str, Handler>,
}

impl Registry {
    /// Start building a custom registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry holding [`STANDARD_OPERATIONS`].
    pub fn standard() -> Self {
        // STANDARD_OPERATIONS has distinct names; covered by a unit test.
        Self {
            handlers: STANDARD_OPERATIONS.iter().copied().collect(),
        }
    }

    /// Look up the handler for `name`.
    pub fn get(&self, name: &str) -> Option<Handler> {
        self.handlers.get(name).copied()
    }

    /// Check if `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered operations
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no operations are registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("operations", &self.names())
            .finish()
    }
}

/// Collects handlers and checks them for duplicate names on [`build`](Self::build).
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<(&'static str, Handler)>,
}

impl RegistryBuilder {
    /// Register `handler` under `name`.
    pub fn register(mut self, name: &'static str, handler: Handler) -> Self {
        self.entries.push((name, handler));
        self
    }

    /// Register every entry of [`STANDARD_OPERATIONS`].
    pub fn with_standard_operations(mut self) -> Self {
        self.entries.extend(STANDARD_OPERATIONS);
        self
    }

    /// Build the registry, rejecting duplicate names.
    pub fn build(self) -> Result<Registry> {
        let mut handlers = FxHashMap::default();
        for (name, handler) in self.entries {
            if handlers.insert(name, handler).is_some() {
                error!(operation = name, "operation registered twice");
                return Err(Error::DuplicateOperation {
                    name: name.to_string(),
                });
            }
        }
        Ok(Registry { handlers })
    }
}
