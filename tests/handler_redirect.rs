mod common;

use axum::http::StatusCode;
use shortener::utils::code_generator::SequenceCodeGenerator;
use std::sync::Arc;

#[tokio::test]
async fn test_redirect_success() {
    let generator = Arc::new(SequenceCodeGenerator::new(["unused"]));
    let (state, repo) = common::create_test_state(generator);
    common::seed(&repo, "abc123", "https://example.com/target").await;
    let server = common::test_server(state);

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let generator = Arc::new(SequenceCodeGenerator::new(["unused"]));
    let (state, _repo) = common::create_test_state(generator);
    let server = common::test_server(state);

    let response = server.get("/missing").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "missing");
}

#[tokio::test]
async fn test_redirect_root_is_not_a_code() {
    let generator = Arc::new(SequenceCodeGenerator::new(["unused"]));
    let (state, _repo) = common::create_test_state(generator);
    let server = common::test_server(state);

    let response = server.get("/").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let generator = Arc::new(SequenceCodeGenerator::new(["unused"]));
    let (state, repo) = common::create_test_state(generator);
    common::seed(&repo, "AbC", "https://example.com").await;
    let server = common::test_server(state);

    server.get("/abc").await.assert_status_not_found();
    server.get("/AbC").await.assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_redirect_accepts_request_id() {
    let generator = Arc::new(SequenceCodeGenerator::new(["unused"]));
    let (state, repo) = common::create_test_state(generator);
    common::seed(&repo, "abc123", "https://example.com").await;
    let server = common::test_server(state);

    let response = server
        .get("/abc123")
        .add_header("x-request-id", "trace-42")
        .await;

    response.assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_redirect_storage_failure() {
    let generator = Arc::new(SequenceCodeGenerator::new(["unused"]));
    let server = common::test_server(common::create_unreachable_state(generator));

    let response = server.get("/abc").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["details"]["kind"], "storage_read_error");
}
