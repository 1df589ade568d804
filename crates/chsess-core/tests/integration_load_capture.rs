//! Integration test: load real-shaped Charles exports from a capture root on disk.

mod common;

use chsess_core::config::ChsessConfig;
use chsess_core::session::{ErrorKind, SessionError, FORM_CONTENT_TYPE, HEADER_ALLOW_LIST};
use chsess_core::source::FsCaptureSource;
use chsess_core::SessionStore;
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn loads_first_record_from_capture_root() {
    let root = tempdir().unwrap();
    common::write_capture(root.path(), "cart.chlsj", common::CART_FIXTURE);

    let store = SessionStore::with_source(FsCaptureSource::with_root(root.path()));
    store.load_from_file("cart.chlsj").expect("load capture");

    let headers = store.headers();
    assert_eq!(headers.len(), HEADER_ALLOW_LIST.len());
    assert_eq!(headers["cookie"], "DDXQSESSID=4b1c2d3e");
    assert_eq!(headers["ddmc-channel"], "App Store");
    assert_eq!(headers["content-type"], FORM_CONTENT_TYPE);
    assert_eq!(headers["ddmc-idfa"], "");
    assert!(!headers.contains_key(":method"));

    let params = store.query_params();
    assert_eq!(params["uid"], "5f1e9a");
    assert_eq!(params["channel"], "App Store");
    assert_eq!(params["device_model"], "iPhone14,5");
    assert_eq!(params["seqid"], "");
    // not allow-listed, still carried through
    assert_eq!(params["is_load"], "1");
}

#[test]
fn config_root_drives_capture_source() {
    let root = tempdir().unwrap();
    common::write_capture(root.path(), "order.chlsj", common::CART_FIXTURE);

    let cfg = ChsessConfig {
        root_dir: Some(root.path().to_path_buf()),
        capture_file: "order.chlsj".to_string(),
    };
    let store = SessionStore::with_source(cfg.capture_source());
    store.load_from_file(&cfg.capture_file).unwrap();
    assert_eq!(store.query_params()["station_id"], "5b3a6f");
}

#[test]
fn missing_capture_is_io_error() {
    let root = tempdir().unwrap();
    let store = SessionStore::with_source(FsCaptureSource::with_root(root.path()));

    let err = store.load_from_file("cart.chlsj").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    match err {
        SessionError::Read { path, source } => {
            assert_eq!(path, root.path().join("charles/ios/cart.chlsj"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Read error, got {other:?}"),
    }
}

#[test]
fn empty_capture_file_is_format_error() {
    let root = tempdir().unwrap();
    common::write_capture(root.path(), "empty.chlsj", "[]");
    let store = SessionStore::with_source(FsCaptureSource::with_root(root.path()));

    let err = store.load_from_file("empty.chlsj").unwrap_err();
    assert!(matches!(err, SessionError::NoRecords));
}

#[test]
fn reload_replaces_headers_and_merges_params() {
    let root = tempdir().unwrap();
    common::write_capture(root.path(), "cart.chlsj", common::CART_FIXTURE);
    common::write_capture(
        root.path(),
        "second.chlsj",
        r#"[{ "query": "uid=next", "request": { "header": { "headers": [
            { "name": "accept", "value": "application/json" }
        ] } } }]"#,
    );
    let store = SessionStore::with_source(FsCaptureSource::with_root(root.path()));
    store.load_from_file("cart.chlsj").unwrap();
    store.load_from_file("second.chlsj").unwrap();

    let headers = store.headers();
    assert_eq!(headers["accept"], "application/json");
    assert_eq!(headers["cookie"], "");

    let params = store.query_params();
    assert_eq!(params["uid"], "next");
    // allow-listed names are re-seeded empty; extras from the first load survive
    assert_eq!(params["station_id"], "");
    assert_eq!(params["is_load"], "1");
}

#[test]
fn shared_store_serves_readers_on_other_threads() {
    let root = tempdir().unwrap();
    common::write_capture(root.path(), "cart.chlsj", common::CART_FIXTURE);
    let store = Arc::new(SessionStore::with_source(FsCaptureSource::with_root(
        root.path(),
    )));
    store.load_from_file("cart.chlsj").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.headers()["ddmc-uid"].clone())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "5f1e9a");
    }
}
