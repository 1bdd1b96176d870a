//! In-memory ledger store
//!
//! # Design
//!
//! - DashMap: sharded by key hash, reads only take a shard read lock
//! - Global AtomicU64 version: every write stamps the entry with a fresh version
//! - Compare-and-swap: checked and applied under the key's shard write lock
//!
//! Nothing is persisted. Dropping the store drops the data.

use dashmap::DashMap;
use marbles_core::{Store, StoreResult, Versioned};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// A stored blob and the version of the write that produced it.
#[derive(Debug, Clone)]
struct Entry {
    value: Vec<u8>,
    version: u64,
}

/// Thread-safe in-memory [`Store`] with per-write version tokens.
///
/// # Example
///
/// ```ignore
/// use marbles_storage::MemoryStore;
/// use marbles_core::Store;
///
/// let store = MemoryStore::new();
/// store.put("MARBLE0", b"{}".to_vec())?;
/// assert!(store.get("MARBLE0")?.is_some());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, Entry>,
    version: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
            version: AtomicU64::new(0),
        }
    }

    /// Version of the most recent write
    #[inline]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    #[inline]
    fn next_version(&self) -> u64 {
        self.version.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Number of keys held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }

    /// All `(key, value)` pairs, sorted by key
    ///
    /// Versions are left out so two stores holding the same data compare
    /// equal regardless of write history.
    pub fn snapshot(&self) -> Vec<(String, Vec<u8>)> {
        let mut pairs: Vec<_> = self
            .entries
            .iter()
            .map(|e| (e.key().clone(), e.value().value.clone()))
            .collect();
        pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
        pairs
    }
}

impl Store for MemoryStore {
    #[inline]
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).map(|e| e.value.clone()))
    }

    fn put(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        let version = self.next_version();
        trace!(key, version, "put");
        self.entries
            .insert(key.to_string(), Entry { value, version });
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        if self.entries.remove(key).is_some() {
            trace!(key, "delete");
        }
        Ok(())
    }

    fn get_versioned(&self, key: &str) -> StoreResult<Option<Versioned>> {
        Ok(self.entries.get(key).map(|e| Versioned {
            value: e.value.clone(),
            version: Some(e.version),
        }))
    }

    fn put_if_version(&self, key: &str, value: Vec<u8>, expected: u64) -> StoreResult<bool> {
        // get_mut holds the shard write lock across check and write.
        let Some(mut entry) = self.entries.get_mut(key) else {
            return Ok(false);
        };
        if entry.version != expected {
            trace!(key, expected, actual = entry.version, "version mismatch");
            return Ok(false);
        }
        entry.value = value;
        entry.version = self.next_version();
        Ok(true)
    }
}
