use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-key";
pub const SPEECH_PATH: &str = "/audio/speech";

/// Provider answers any speech request with `audio` and the given content type
pub async fn mock_speech(server: &MockServer, audio: &[u8], content_type: &str) {
    Mock::given(method("POST"))
        .and(path(SPEECH_PATH))
        .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
        .and(body_partial_json(json!({ "model": "gpt-4o-mini-tts" })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", content_type)
                .set_body_bytes(audio.to_vec()),
        )
        .mount(server)
        .await;
}

/// Provider answers requests whose body contains `marker`; expects exactly `times` calls
pub async fn mock_speech_for(
    server: &MockServer,
    marker: &str,
    response: ResponseTemplate,
    times: u64,
) {
    Mock::given(method("POST"))
        .and(path(SPEECH_PATH))
        .and(body_string_contains(marker))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

pub fn audio_response(audio: &[u8]) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "audio/mpeg")
        .set_body_bytes(audio.to_vec())
}

/// Three paragraphs that chunk into exactly three parts at the 3800 char target
pub fn three_paragraph_text() -> String {
    format!(
        "{}\n\n{}\n\n{}",
        "first ".repeat(500).trim(),
        "second ".repeat(500).trim(),
        "third ".repeat(500).trim()
    )
}
