//! Shared helpers for the integration suite.

use std::sync::{Arc, Once};

use marbles::prelude::*;

static TRACING: Once = Once::new();

/// Route tracing output through the test harness. Set `RUST_LOG`-style
/// verbosity with `MARBLES_TEST_LOG=debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        if let Ok(level) = std::env::var("MARBLES_TEST_LOG") {
            let level = level.parse().unwrap_or(tracing::Level::INFO);
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_test_writer()
                .try_init();
        }
    });
}

/// Contract over a fresh in-memory store, with a handle on the store.
pub fn create_contract() -> (Marbles, Arc<MemoryStore>) {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let contract = Marbles::builder()
        .store(store.clone())
        .build()
        .expect("contract should build");
    (contract, store)
}

/// Canonical encoding of a marble as a string.
pub fn marble_json(color: &str, size: i64, owner: &str) -> String {
    format!(
        r#"{{"objectType":"Marble","color":"{}","size":{},"owner":"{}"}}"#,
        color, size, owner
    )
}

/// Assert a response succeeded, showing its message otherwise.
pub fn assert_ok(resp: &Response) {
    assert!(resp.is_success(), "expected success, got: {}", resp.message);
}

/// Assert a response failed with the given error code.
pub fn assert_failed_with(resp: &Response, code: &str) {
    assert_eq!(resp.status, Status::Failure, "expected failure with {}", code);
    assert_eq!(resp.error_code, Some(code), "message: {}", resp.message);
}
