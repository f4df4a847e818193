use crate::e2e::helpers;

use helpers::provider_mocks::{audio_response, mock_speech, mock_speech_for, three_paragraph_text};
use helpers::{spawn_engine, test_config, TestContext};
use serde_json::json;
use test_context::test_context;
use tts_engine::client::{ClientError, EngineClient};
use tts_engine::domain::tts::{AudioFormat, SynthesisRequest};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fetch_single_shot_audio(ctx: &mut TestContext) {
    mock_speech(&ctx.provider, b"ID3-audio", "audio/mpeg").await;
    let client = EngineClient::new(&ctx.base_url);

    let blob = client
        .tts(&SynthesisRequest::new("Hello there"))
        .await
        .unwrap();

    assert_eq!(blob.data, b"ID3-audio".to_vec());
    assert_eq!(blob.content_type, "audio/mpeg");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_rebuild_chunked_audio_in_order(ctx: &mut TestContext) {
    mock_speech_for(&ctx.provider, "first", audio_response(b"one"), 1).await;
    mock_speech_for(&ctx.provider, "second", audio_response(b"two"), 1).await;
    mock_speech_for(&ctx.provider, "third", audio_response(b"three"), 1).await;
    let client = EngineClient::new(&ctx.base_url);

    let clips = client
        .tts_chunked(&SynthesisRequest::new(three_paragraph_text()))
        .await
        .unwrap();

    let data: Vec<&[u8]> = clips.iter().map(|clip| clip.blob.data.as_slice()).collect();
    assert_eq!(data, vec![&b"one"[..], &b"two"[..], &b"three"[..]]);
    let filenames: Vec<&str> = clips.iter().map(|clip| clip.filename.as_str()).collect();
    assert_eq!(
        filenames,
        vec!["tts-part-01.mp3", "tts-part-02.mp3", "tts-part-03.mp3"]
    );
    assert!(clips.iter().all(|clip| clip.content_type == "audio/mpeg"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_propagate_engine_error_messages(ctx: &mut TestContext) {
    let client = EngineClient::new(&ctx.base_url);

    let err = client
        .tts(&SynthesisRequest::new("a".repeat(5000)))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(
        err.to_string(),
        "Text exceeds 4096 chars. Use /openai/tts-chunked for long text."
    );
}

#[tokio::test]
async fn it_should_propagate_configuration_errors() {
    let provider = MockServer::start().await;
    let mut config = test_config(&provider);
    config.openai_api_key = None;
    let client = EngineClient::new(spawn_engine(config).await);

    let err = client
        .tts_chunked(&SynthesisRequest::new("Hello").with_format(AudioFormat::Wav))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Relay { status: 500, ref message }
            if message == "OPENAI_API_KEY is not set on the Engine server."
    ));
}

#[tokio::test]
async fn it_should_return_no_clips_for_empty_parts() {
    let engine = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/tts-chunked"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "parts": [] })))
        .mount(&engine)
        .await;

    let clips = EngineClient::new(engine.uri())
        .tts_chunked(&SynthesisRequest::new("Hello"))
        .await
        .unwrap();

    assert!(clips.is_empty());
}

#[tokio::test]
async fn it_should_fall_back_to_raw_body_then_status() {
    let engine = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/tts"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&engine)
        .await;
    Mock::given(method("POST"))
        .and(path("/openai/tts-chunked"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&engine)
        .await;
    let client = EngineClient::new(engine.uri());

    let err = client.tts(&SynthesisRequest::new("Hello")).await.unwrap_err();
    assert_eq!(err.to_string(), "Service Unavailable");

    let err = client
        .tts_chunked(&SynthesisRequest::new("Hello"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Engine request failed (502)");
}
