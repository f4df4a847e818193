pub mod chunking;
pub mod dto;
pub mod error;
pub mod service;
pub mod validation;

pub use chunking::{split_text_into_chunks, TextChunker};
pub use dto::{
    suggested_filename, AudioFormat, AudioPart, ChunkedSynthesisResponse, SynthesisRequest,
    SynthesizedAudio, DEFAULT_VOICE,
};
pub use error::TtsServiceError;
pub use service::{TtsService, TtsServiceApi, CHUNK_TARGET, MAX_TTS_CHARS};
pub use validation::validate_tts_input;
