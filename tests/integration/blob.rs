//! Blob endpoint integration tests
//!
//! Tests for whole-object read and replace of the file-backed blob:
//! - GET /test/blob - serve current bytes as application/octet-stream
//! - PUT /test/blob - replace wholesale, reject empty bodies

use axum::http::StatusCode;
use bytes::Bytes;
use pretty_assertions::assert_eq;

use crate::common::{TestHarness, SEED_BLOB};

#[tokio::test]
async fn test_get_blob_returns_seeded_bytes() {
    let harness = TestHarness::new();

    let response = harness.server.get("/test/blob").await;

    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), SEED_BLOB);
}

#[tokio::test]
async fn test_get_blob_content_type_is_octet_stream() {
    let harness = TestHarness::new();

    let response = harness.server.get("/test/blob").await;

    response.assert_status_ok();
    assert_eq!(
        response.header("content-type"),
        "application/octet-stream"
    );
}

#[tokio::test]
async fn test_put_blob_round_trip() {
    let harness = TestHarness::new();
    let payload: Vec<u8> = (0u8..=255).collect();

    let response = harness
        .server
        .put("/test/blob")
        .bytes(Bytes::from(payload.clone()))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<String>(), "Ok.");

    let response = harness.server.get("/test/blob").await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), payload.as_slice());
}

#[tokio::test]
async fn test_put_blob_overwrites_fully() {
    // Shorter replacement must not leave a tail of the longer original.
    let harness = TestHarness::with_blob(b"a fairly long original blob content");

    let response = harness
        .server
        .put("/test/blob")
        .bytes(Bytes::from_static(b"tiny"))
        .await;
    response.assert_status_ok();

    let response = harness.server.get("/test/blob").await;
    assert_eq!(response.as_bytes().as_ref(), b"tiny");
    assert_eq!(harness.blob_file_content(), b"tiny");
}

#[tokio::test]
async fn test_put_blob_empty_body_is_rejected_without_mutation() {
    let harness = TestHarness::new();

    let response = harness.server.put("/test/blob").bytes(Bytes::new()).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(harness.blob_file_content(), SEED_BLOB);

    let response = harness.server.get("/test/blob").await;
    assert_eq!(response.as_bytes().as_ref(), SEED_BLOB);
}

#[tokio::test]
async fn test_put_blob_is_idempotent() {
    let harness = TestHarness::new();

    for _ in 0..2 {
        let response = harness
            .server
            .put("/test/blob")
            .bytes(Bytes::from_static(b"same payload"))
            .await;
        response.assert_status_ok();
    }

    let response = harness.server.get("/test/blob").await;
    assert_eq!(response.as_bytes().as_ref(), b"same payload");
}

#[tokio::test]
async fn test_get_blob_reads_fresh_from_disk() {
    let harness = TestHarness::new();

    // First GET caches nothing, so an external write must be visible.
    harness.server.get("/test/blob").await.assert_status_ok();

    let put = harness
        .server
        .put("/test/blob")
        .bytes(Bytes::from_static(b"updated out of band"))
        .await;
    put.assert_status_ok();

    let response = harness.server.get("/test/blob").await;
    assert_eq!(response.as_bytes().as_ref(), b"updated out of band");
}
