//! Ledger store abstraction
//!
//! The host owns the ledger. The contract sees it only through [`Store`]:
//! string keys mapped to opaque byte blobs.
//!
//! ## Concurrency
//!
//! The contract takes no locks. Two invocations racing on one key resolve
//! as last-writer-wins unless the store offers versioned writes through
//! [`Store::get_versioned`] and [`Store::put_if_version`]. Stores that
//! keep the default implementations give no per-key serialization; the
//! host must order conflicting writes itself.

use crate::error::StoreResult;

/// A stored value together with the version token it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned {
    /// Raw stored bytes
    pub value: Vec<u8>,
    /// Version token, `None` when the store does not track versions
    pub version: Option<u64>,
}

/// Key-value ledger supplied by the host.
///
/// Implementations must be `Send + Sync`: one store may serve concurrent
/// invocations.
pub trait Store: Send + Sync {
    /// Read the value under `key`. `Ok(None)` if absent.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing anything there.
    fn put(&self, key: &str, value: Vec<u8>) -> StoreResult<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn delete(&self, key: &str) -> StoreResult<()>;

    /// Read the value under `key` along with its version token.
    ///
    /// The default wraps [`Store::get`] and reports no version.
    fn get_versioned(&self, key: &str) -> StoreResult<Option<Versioned>> {
        Ok(self.get(key)?.map(|value| Versioned {
            value,
            version: None,
        }))
    }

    /// Write `value` only if `key` is still at version `expected`.
    ///
    /// Returns `Ok(false)` when the key moved on (or vanished) since it was
    /// read. The default writes unconditionally and returns `Ok(true)`.
    fn put_if_version(&self, key: &str, value: Vec<u8>, expected: u64) -> StoreResult<bool> {
        let _ = expected;
        self.put(key, value)?;
        Ok(true)
    }
}

impl<S: Store + ?Sized> Store for std::sync::Arc<S> {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }

    fn get_versioned(&self, key: &str) -> StoreResult<Option<Versioned>> {
        (**self).get_versioned(key)
    }

    fn put_if_version(&self, key: &str, value: Vec<u8>, expected: u64) -> StoreResult<bool> {
        (**self).put_if_version(key, value, expected)
    }
}
