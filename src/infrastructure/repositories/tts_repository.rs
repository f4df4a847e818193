use crate::domain::tts::{AudioFormat, SynthesizedAudio};
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum TtsRepositoryError {
    /// No credential (or other required setting) for the provider
    #[error("{0}")]
    Configuration(String),
    /// The provider rejected the request or could not be reached
    #[error("{0}")]
    Upstream(String),
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying speech provider.
///
/// One call is exactly one provider request: implementations do not split,
/// merge or retry. Callers are responsible for keeping `text` within the
/// provider limit.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `text` with the given voice and format
    ///
    /// # Errors
    /// `Configuration` if no credential is available (checked before any
    /// network traffic), `Upstream` if the provider call fails
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        format: AudioFormat,
    ) -> Result<SynthesizedAudio, TtsRepositoryError>;
}
