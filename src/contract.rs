//! Main entry point for the marbles contract.
//!
//! [`Marbles`] wraps an [`Executor`] with typed methods, the way a Rust host
//! or test would drive the contract. [`MarblesBuilder`] holds configuration.

use std::sync::Arc;

use marbles_core::{DecodePolicy, Marble, Store};
use marbles_executor::{Command, Error, Executor, ExecutorConfig, Output, Registry, Response, Result};
use marbles_storage::MemoryStore;

/// The marbles contract bound to a store.
///
/// # Example
///
/// ```ignore
/// use marbles::prelude::*;
///
/// let contract = Marbles::ephemeral();
/// contract.add_marble("M1", "pink", 6, "Tom")?;
/// contract.change_owner("M1", "Ann")?;
/// assert_eq!(contract.read_marble("M1")?.unwrap().owner, "Ann");
/// ```
#[derive(Debug)]
pub struct Marbles {
    executor: Executor,
}

impl Marbles {
    /// Contract over `store` with default settings.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            executor: Executor::new(store),
        }
    }

    /// Contract over a fresh in-memory store. Data is gone when dropped.
    pub fn ephemeral() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Create a builder for contract configuration.
    ///
    /// ```ignore
    /// let contract = Marbles::builder()
    ///     .store(ledger)
    ///     .strict_decoding()
    ///     .build()?;
    /// ```
    pub fn builder() -> MarblesBuilder {
        MarblesBuilder::new()
    }

    /// Get the underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// String entry point, as the host calls it.
    pub fn invoke<S: AsRef<str>>(&self, operation: &str, args: &[S]) -> Response {
        self.executor.invoke(operation, args)
    }

    // =========================================================================
    // Typed operations
    // =========================================================================

    /// Raw bytes stored under `key`, or `None` if absent.
    pub fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.executor.execute(Command::Read {
            key: key.to_string(),
        })? {
            Output::Maybe(bytes) => Ok(bytes),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Read".into(),
            }),
        }
    }

    /// Decoded marble under `key`, or `None` if absent.
    pub fn read_marble(&self, key: &str) -> Result<Option<Marble>> {
        let codec = marbles_core::MarbleCodec::new(self.executor.config().decode_policy);
        self.read(key)?
            .map(|bytes| {
                codec.decode(&bytes).map_err(|source| Error::Decode {
                    key: key.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Store a marble under `key`, replacing anything there.
    pub fn add_marble(&self, key: &str, color: &str, size: i64, owner: &str) -> Result<()> {
        self.unit(Command::AddMarble {
            key: key.to_string(),
            color: color.to_string(),
            size,
            owner: owner.to_string(),
        })
    }

    /// Give the marble under `key` to `owner`.
    pub fn change_owner(&self, key: &str, owner: &str) -> Result<()> {
        self.unit(Command::ChangeOwner {
            key: key.to_string(),
            owner: owner.to_string(),
        })
    }

    /// Remove `key`. Succeeds if it was already absent.
    pub fn delete(&self, key: &str) -> Result<()> {
        self.unit(Command::Delete {
            key: key.to_string(),
        })
    }

    /// Write the seed marbles `MARBLE0`..`MARBLE9`.
    pub fn init_marbles(&self) -> Result<()> {
        self.unit(Command::InitMarbles)
    }

    fn unit(&self, cmd: Command) -> Result<()> {
        let name = cmd.name();
        match self.executor.execute(cmd)? {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal {
                reason: format!("Unexpected output for {}", name),
            }),
        }
    }
}

/// Builder for contract configuration.
///
/// # Example
///
/// ```ignore
/// // Strict decoding against a host store
/// let contract = Marbles::builder()
///     .store(ledger)
///     .strict_decoding()
///     .build()?;
///
/// // Tests: in-memory store, plain last-writer-wins updates
/// let contract = Marbles::builder()
///     .last_writer_wins()
///     .build()?;
/// ```
#[derive(Default)]
pub struct MarblesBuilder {
    store: Option<Arc<dyn Store>>,
    config: ExecutorConfig,
    registry: Option<Registry>,
}

impl MarblesBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `store` as the ledger. Without one, a fresh [`MemoryStore`] is used.
    pub fn store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ExecutorConfig) -> Self {
        self.config = config;
        self
    }

    /// Reject stored marbles with missing fields or a foreign `objectType`.
    pub fn strict_decoding(mut self) -> Self {
        self.config.decode_policy = DecodePolicy::Strict;
        self
    }

    /// Decode missing fields as zero values (default).
    pub fn permissive_decoding(mut self) -> Self {
        self.config.decode_policy = DecodePolicy::Permissive;
        self
    }

    /// Write `changeOwner` results unconditionally, even if the store
    /// supports versioned writes.
    pub fn last_writer_wins(mut self) -> Self {
        self.config.compare_and_swap = false;
        self
    }

    /// Dispatch through a custom registry.
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the contract.
    pub fn build(self) -> Result<Marbles> {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryStore::new()) as Arc<dyn Store>);
        let registry = self.registry.unwrap_or_default();
        if registry.is_empty() {
            return Err(Error::Internal {
                reason: "registry has no operations".into(),
            });
        }
        Ok(Marbles {
            executor: Executor::with_registry(store, self.config, registry),
        })
    }
}
