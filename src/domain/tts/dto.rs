use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_VOICE: &str = "alloy";

/// Audio container requested from the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
    Wav,
}

impl AudioFormat {
    /// Anything other than `wav` becomes `mp3`
    pub fn normalize(value: Option<&str>) -> Self {
        match value {
            Some("wav") => AudioFormat::Wav,
            _ => AudioFormat::Mp3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
        }
    }

    /// Content type used when the provider does not report one
    pub fn default_content_type(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::Wav => "audio/wav",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated body of POST /openai/tts and POST /openai/tts-chunked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default)]
    pub format: AudioFormat,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: default_voice(),
            format: AudioFormat::default(),
        }
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn with_format(mut self, format: AudioFormat) -> Self {
        self.format = format;
        self
    }
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

/// Audio returned by the provider for one request
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub audio_data: Vec<u8>,
    pub content_type: String,
    pub format: AudioFormat,
}

/// One synthesized chunk, as returned by POST /openai/tts-chunked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPart {
    pub index: usize,
    pub content_type: String,
    pub base64: String,
    pub suggested_filename: String,
}

/// Response for POST /openai/tts-chunked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkedSynthesisResponse {
    pub parts: Vec<AudioPart>,
}

/// `tts-part-<NN>.<format>` with a 1-based, zero-padded index
pub fn suggested_filename(index: usize, format: AudioFormat) -> String {
    format!("tts-part-{:02}.{}", index + 1, format)
}
