//! Client for the Engine relay.
//!
//! Calls `/openai/tts` and `/openai/tts-chunked` and turns the responses back
//! into binary audio.

pub mod error;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Deserialize;
use std::env;

use crate::domain::tts::{AudioFormat, SynthesisRequest};

pub use error::ClientError;

pub const DEFAULT_ENGINE_BASE: &str = "http://localhost:8787";

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Binary audio with its content type
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBlob {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// One decoded part of a chunked synthesis
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub blob: AudioBlob,
    pub filename: String,
    pub content_type: String,
}

/// Chunked response as read by the client; every field except the audio is optional
#[derive(Debug, Default, Deserialize)]
struct RelayChunkedResponse {
    #[serde(default)]
    parts: Option<Vec<RelayPart>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelayPart {
    #[serde(default)]
    index: usize,
    #[serde(default)]
    content_type: Option<String>,
    base64: String,
    #[serde(default)]
    suggested_filename: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelayError {
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EngineClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl Default for EngineClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE_BASE)
    }
}

impl EngineClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    pub fn with_http_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// Base URL from `ENGINE_BASE_URL`, falling back to the local default
    pub fn from_env() -> Self {
        let base_url = env::var("ENGINE_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENGINE_BASE.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Synthesize text that fits in one provider request
    pub async fn tts(&self, request: &SynthesisRequest) -> Result<AudioBlob, ClientError> {
        let response = self.post("/openai/tts", request).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(request.format.default_content_type())
            .to_string();
        let data = response.bytes().await?.to_vec();

        Ok(AudioBlob { data, content_type })
    }

    /// Synthesize text of any length; parts come back in chunk order
    pub async fn tts_chunked(
        &self,
        request: &SynthesisRequest,
    ) -> Result<Vec<AudioClip>, ClientError> {
        let response = self.post("/openai/tts-chunked", request).await?;
        let body: RelayChunkedResponse = response.json().await?;

        decode_parts(body, request.format)
    }

    async fn post(
        &self,
        path: &str,
        request: &SynthesisRequest,
    ) -> Result<reqwest::Response, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, text_length = request.text.chars().count(), "Calling Engine");

        let response = self.http_client.post(&url).json(request).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(ClientError::Relay {
            status: status.as_u16(),
            message: relay_error_message(status, &body),
        })
    }
}

/// The Engine's `error` field, else the raw body, else a generic message
///
/// An empty `error` field counts as absent and yields the generic message.
fn relay_error_message(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<RelayError>(body) {
        Ok(RelayError {
            error: Some(message),
        }) if !message.is_empty() => return message,
        Ok(RelayError { error: Some(_) }) => {
            return format!("Engine request failed ({})", status.as_u16())
        }
        _ => {}
    }

    let text = String::from_utf8_lossy(body);
    if !text.trim().is_empty() {
        return text.into_owned();
    }

    format!("Engine request failed ({})", status.as_u16())
}

fn decode_parts(
    response: RelayChunkedResponse,
    format: AudioFormat,
) -> Result<Vec<AudioClip>, ClientError> {
    response
        .parts
        .unwrap_or_default()
        .into_iter()
        .map(|part| {
            let data = STANDARD
                .decode(part.base64.as_bytes())
                .map_err(|source| ClientError::Decode {
                    index: part.index,
                    source,
                })?;

            let blob_type = part
                .content_type
                .clone()
                .unwrap_or_else(|| format.default_content_type().to_string());

            Ok(AudioClip {
                blob: AudioBlob {
                    data,
                    content_type: blob_type,
                },
                filename: part
                    .suggested_filename
                    .unwrap_or_else(|| format!("tts-part-{}.{}", part.index, format)),
                content_type: part
                    .content_type
                    .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string()),
            })
        })
        .collect()
}
