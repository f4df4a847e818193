use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &mut TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body, Some(json!({ "ok": true })));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_attach_a_request_id(ctx: &mut TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_header_exists("x-request-id");
    let request_id = response.header("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_call_the_provider_for_health_checks(ctx: &mut TestContext) {
    ctx.client.get("/health").await.unwrap();

    let received = ctx.provider.received_requests().await.unwrap();
    assert!(received.is_empty());
}
