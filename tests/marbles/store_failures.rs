//! Store Failure Tests
//!
//! Store errors surface as StoreError failures and do not poison later calls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::common::*;
use marbles::marbles_core::StoreResult;
use marbles::prelude::*;
use marbles::StoreError;

/// Store that fails every call while `down` is set.
#[derive(Default)]
struct Flaky {
    inner: MemoryStore,
    down: AtomicBool,
}

impl Flaky {
    fn check(&self) -> StoreResult<()> {
        if self.down.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                reason: "ledger offline".into(),
            });
        }
        Ok(())
    }
}

impl Store for Flaky {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        self.check()?;
        self.inner.get(key)
    }

    fn put(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        self.check()?;
        self.inner.put(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        self.check()?;
        self.inner.delete(key)
    }
}

fn flaky_contract() -> (Marbles, Arc<Flaky>) {
    init_tracing();
    let store = Arc::new(Flaky::default());
    let contract = Marbles::builder().store(store.clone()).build().unwrap();
    (contract, store)
}

#[test]
fn every_operation_reports_store_errors() {
    let (contract, store) = flaky_contract();
    contract.add_marble("M1", "pink", 6, "Tom").unwrap();
    store.down.store(true, Ordering::SeqCst);

    let cases: [(&str, &[&str]); 5] = [
        ("read", &["M1"]),
        ("addMarble", &["M2", "red", "1", "Ann"]),
        ("changeOwner", &["M1", "Ann"]),
        ("delete", &["M1"]),
        ("initMarbles", &[]),
    ];
    for (name, args) in cases {
        let resp = contract.invoke(name, args);
        assert_failed_with(&resp, "StoreError");
        assert!(resp.message.contains("ledger offline"), "{}", resp.message);
    }
}

#[test]
fn failures_do_not_corrupt_later_invocations() {
    let (contract, store) = flaky_contract();
    contract.add_marble("M1", "pink", 6, "Tom").unwrap();

    store.down.store(true, Ordering::SeqCst);
    assert!(!contract.invoke("changeOwner", &["M1", "Ann"]).is_success());
    store.down.store(false, Ordering::SeqCst);

    assert_eq!(
        contract.read_marble("M1").unwrap(),
        Some(Marble::new("pink", 6, "Tom"))
    );
    assert_ok(&contract.invoke("changeOwner", &["M1", "Ann"]));
    assert_eq!(contract.read_marble("M1").unwrap().unwrap().owner, "Ann");
}

#[test]
fn plain_store_without_versions_still_updates() {
    let (contract, _) = flaky_contract();
    contract.add_marble("M1", "pink", 6, "Tom").unwrap();

    contract.change_owner("M1", "Ann").unwrap();

    assert_eq!(contract.read_marble("M1").unwrap().unwrap().owner, "Ann");
}
