//! Dispatch Tests
//!
//! Operation names, argument validation and failure reporting.

use crate::common::*;

#[test]
fn every_standard_operation_dispatches() {
    let (contract, _) = create_contract();

    assert_ok(&contract.invoke("addMarble", &["M1", "pink", "6", "Tom"]));
    assert_ok(&contract.invoke("read", &["M1"]));
    assert_ok(&contract.invoke("changeOwner", &["M1", "Ann"]));
    assert_ok(&contract.invoke("delete", &["M1"]));
    assert_ok(&contract.invoke::<&str>("initMarbles", &[]));
}

#[test]
fn names_are_case_sensitive() {
    let (contract, store) = create_contract();

    for name in ["Read", "ADDMARBLE", "addmarble", "change_owner", "init", ""] {
        let resp = contract.invoke(name, &["M1", "pink", "6", "Tom"]);
        assert_failed_with(&resp, "UnknownOperation");
    }
    assert!(store.is_empty());
}

#[test]
fn unknown_operation_message_names_the_operation() {
    let (contract, _) = create_contract();

    let resp = contract.invoke("transferMarble", &["M1"]);

    assert_failed_with(&resp, "UnknownOperation");
    assert!(resp.message.contains("transferMarble"), "{}", resp.message);
    assert_eq!(resp.status.code(), 500);
    assert_eq!(resp.payload, None);
}

#[test]
fn short_argument_lists_fail_cleanly() {
    let (contract, store) = create_contract();

    let cases: [(&str, &[&str]); 6] = [
        ("read", &[]),
        ("addMarble", &[]),
        ("addMarble", &["M1", "pink", "6"]),
        ("changeOwner", &["M1"]),
        ("changeOwner", &[]),
        ("delete", &[]),
    ];
    for (name, args) in cases {
        assert_failed_with(&contract.invoke(name, args), "InvalidArguments");
    }
    assert!(store.is_empty());
}

#[test]
fn non_numeric_size_is_rejected() {
    let (contract, store) = create_contract();

    for size in ["six", "", "6.0", " 6", "0x10"] {
        let resp = contract.invoke("addMarble", &["M1", "pink", size, "Tom"]);
        assert_failed_with(&resp, "InvalidArguments");
    }
    assert!(!store.contains("M1"));
}

#[test]
fn extra_arguments_are_ignored() {
    let (contract, _) = create_contract();

    assert_ok(&contract.invoke("addMarble", &["M1", "pink", "6", "Tom", "surplus"]));
    let resp = contract.invoke("read", &["M1", "surplus"]);

    assert_eq!(resp.payload_bytes(), marble_json("pink", 6, "Tom").as_bytes());
}

#[test]
fn init_marbles_ignores_arguments() {
    let (contract, store) = create_contract();

    assert_ok(&contract.invoke("initMarbles", &["whatever"]));
    assert_eq!(store.len(), 10);
}

#[test]
fn success_status_code_is_200() {
    let (contract, _) = create_contract();

    let resp = contract.invoke("read", &["missing"]);

    assert_eq!(resp.status.code(), 200);
    assert!(resp.message.is_empty());
}

#[test]
fn raw_invocation_uses_first_argument_as_name() {
    let (contract, _) = create_contract();
    let executor = contract.executor();

    let add: Vec<Vec<u8>> = ["addMarble", "M1", "pink", "6", "Tom"]
        .iter()
        .map(|s| s.as_bytes().to_vec())
        .collect();
    assert_ok(&executor.invoke_raw(&add));

    let read: Vec<Vec<u8>> = vec![b"read".to_vec(), b"M1".to_vec()];
    let resp = executor.invoke_raw(&read);
    assert_eq!(resp.payload_bytes(), marble_json("pink", 6, "Tom").as_bytes());
}
