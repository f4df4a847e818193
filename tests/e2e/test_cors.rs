use crate::e2e::helpers;

use helpers::api_client::TestClient;
use helpers::{spawn_engine, test_config, TestContext};
use hyper::StatusCode;
use test_context::test_context;
use wiremock::MockServer;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_allow_loopback_origins_by_default(ctx: &mut TestContext) {
    let response = ctx
        .client
        .get_with_origin("/health", "http://localhost:5173")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("access-control-allow-origin", "http://localhost:5173");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_grant_unknown_origins(ctx: &mut TestContext) {
    let response = ctx
        .client
        .get_with_origin("/health", "https://evil.example")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert!(response.header("access-control-allow-origin").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_preflight_requests(ctx: &mut TestContext) {
    let response = ctx
        .client
        .preflight("/openai/tts", "http://127.0.0.1:3000")
        .await
        .unwrap();

    assert!(response.status.is_success(), "preflight failed: {}", response.status);
    response.assert_header("access-control-allow-origin", "http://127.0.0.1:3000");
    let methods = response
        .header("access-control-allow-methods")
        .expect("Missing allow-methods header");
    assert!(methods.contains("POST"));
    assert!(ctx.provider.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn it_should_only_allow_configured_origins_when_listed() {
    let provider = MockServer::start().await;
    let mut config = test_config(&provider);
    config.allowed_origins = Some(vec!["https://app.example".to_string()]);
    let client = TestClient::new(&spawn_engine(config).await);

    client
        .get_with_origin("/health", "https://app.example")
        .await
        .unwrap()
        .assert_header("access-control-allow-origin", "https://app.example");

    let response = client
        .get_with_origin("/health", "http://localhost:5173")
        .await
        .unwrap();
    assert!(response.header("access-control-allow-origin").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_the_null_origin(ctx: &mut TestContext) {
    // Sandboxed iframes and file:// pages send `Origin: null`
    let response = ctx
        .client
        .get_with_origin("/health", "null")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("access-control-allow-origin", "null");
}
