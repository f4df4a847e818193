use super::chunking::TextChunker;
use super::dto::{suggested_filename, AudioPart, SynthesisRequest, SynthesizedAudio};
use super::error::TtsServiceError;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;

/// The provider rejects longer inputs
pub const MAX_TTS_CHARS: usize = 4096;

/// Target chunk size for chunked synthesis, kept below `MAX_TTS_CHARS`
pub const CHUNK_TARGET: usize = 3800;

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    chunk_target: usize,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self {
            tts_repo,
            chunk_target: CHUNK_TARGET,
        }
    }

    /// Override the chunk size used by `synthesize_chunked`
    pub fn with_chunk_target(mut self, chunk_target: usize) -> Self {
        self.chunk_target = chunk_target;
        self
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text that fits in a single provider request
    ///
    /// Text longer than `MAX_TTS_CHARS` is rejected; callers should use
    /// `synthesize_chunked` for it.
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, TtsServiceError>;

    /// Split text into chunks and synthesize them one after another
    ///
    /// All-or-nothing: the first failing chunk aborts the whole request and
    /// no parts are returned.
    async fn synthesize_chunked(
        &self,
        request: SynthesisRequest,
    ) -> Result<Vec<AudioPart>, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, TtsServiceError> {
        let char_count = request.text.chars().count();

        tracing::info!(
            text_length = char_count,
            voice = %request.voice,
            format = %request.format,
            "TTS synthesis request"
        );

        if char_count > MAX_TTS_CHARS {
            return Err(TtsServiceError::Invalid(format!(
                "Text exceeds {} chars. Use /openai/tts-chunked for long text.",
                MAX_TTS_CHARS
            )));
        }

        let result = self
            .tts_repo
            .synthesize(&request.text, &request.voice, request.format)
            .await?;

        Ok(result)
    }

    async fn synthesize_chunked(
        &self,
        request: SynthesisRequest,
    ) -> Result<Vec<AudioPart>, TtsServiceError> {
        let start_time = std::time::Instant::now();
        let format = request.format;
        let chunks: Vec<&str> = TextChunker::new(&request.text, self.chunk_target).collect();

        tracing::info!(
            text_length = request.text.chars().count(),
            chunk_count = chunks.len(),
            voice = %request.voice,
            format = %format,
            "Chunked TTS synthesis request"
        );

        let mut parts = Vec::with_capacity(chunks.len());

        for (index, chunk) in chunks.iter().enumerate() {
            let chunk_length = chunk.chars().count();
            if chunk_length > MAX_TTS_CHARS {
                return Err(TtsServiceError::Invalid(format!(
                    "Chunk {} exceeded max {} characters.",
                    index + 1,
                    MAX_TTS_CHARS
                )));
            }

            tracing::info!(chunk_index = index, chunk_length, "Synthesizing chunk");

            let result = self
                .tts_repo
                .synthesize(chunk, &request.voice, format)
                .await
                .map_err(|e| {
                    tracing::error!(
                        chunk_index = index,
                        error = %e,
                        "Chunk synthesis failed, aborting request"
                    );
                    TtsServiceError::from(e)
                })?;

            parts.push(AudioPart {
                index,
                content_type: result.content_type,
                base64: STANDARD.encode(&result.audio_data),
                suggested_filename: suggested_filename(index, format),
            });
        }

        tracing::info!(
            part_count = parts.len(),
            latency_ms = start_time.elapsed().as_millis(),
            "Chunked TTS synthesis completed"
        );

        Ok(parts)
    }
}
