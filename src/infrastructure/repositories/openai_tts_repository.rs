use super::tts_repository::{TtsRepository, TtsRepositoryError};
use crate::domain::tts::{AudioFormat, SynthesizedAudio, DEFAULT_VOICE};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const TTS_MODEL: &str = "gpt-4o-mini-tts";

pub const MISSING_API_KEY: &str = "OPENAI_API_KEY is not set on the Engine server.";

/// Body of POST /audio/speech
#[derive(Debug, Serialize)]
struct SpeechPayload<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    format: AudioFormat,
}

/// OpenAI TTS implementation of TTS repository
pub struct OpenAiTtsRepository {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAiTtsRepository {
    pub fn new(client: reqwest::Client, api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url,
        }
    }

    fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.base_url)
    }
}

#[async_trait]
impl TtsRepository for OpenAiTtsRepository {
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        format: AudioFormat,
    ) -> Result<SynthesizedAudio, TtsRepositoryError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| TtsRepositoryError::Configuration(MISSING_API_KEY.to_string()))?;

        let payload = SpeechPayload {
            model: TTS_MODEL,
            input: text,
            voice: if voice.is_empty() { DEFAULT_VOICE } else { voice },
            format,
        };

        tracing::info!(
            model = TTS_MODEL,
            voice = payload.voice,
            format = %format,
            text_length = text.chars().count(),
            "Calling OpenAI TTS API"
        );

        let start_time = std::time::Instant::now();

        let response = self
            .client
            .post(self.speech_url())
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "OpenAI TTS API unreachable");
                TtsRepositoryError::Upstream(format!("OpenAI request failed: {}", e))
            })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .unwrap_or(format.default_content_type())
            .to_string();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %error_text,
                "OpenAI TTS API call failed"
            );
            return Err(TtsRepositoryError::Upstream(format!(
                "OpenAI request failed ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsRepositoryError::Upstream(format!("OpenAI request failed: {}", e)))?
            .to_vec();

        tracing::info!(
            provider = "openai",
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio_data.len(),
            content_type = %content_type,
            "OpenAI TTS audio received"
        );

        Ok(SynthesizedAudio {
            audio_data,
            content_type,
            format,
        })
    }
}
