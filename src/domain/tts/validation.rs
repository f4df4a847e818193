use serde_json::Value;

use super::dto::{AudioFormat, SynthesisRequest, DEFAULT_VOICE};
use super::error::TtsServiceError;

pub const INVALID_BODY: &str = "Request body must be valid JSON.";
pub const INVALID_TEXT: &str = "'text' is required and must be a non-empty string.";
pub const INVALID_FORMAT: &str = "'format' must be either 'mp3' or 'wav'.";

/// Validate a raw TTS request body and turn it into a `SynthesisRequest`
///
/// Checks run in order: body shape, `text`, then `format`. A `format` that is
/// absent or falsy (null, `false`, `0`, `""`) means the default. A `voice` that is not a string
/// falls back to the default voice.
pub fn validate_tts_input(body: &Value) -> Result<SynthesisRequest, TtsServiceError> {
    let object = body
        .as_object()
        .ok_or_else(|| TtsServiceError::Invalid(INVALID_BODY.to_string()))?;

    let text = match object.get("text").and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => return Err(TtsServiceError::Invalid(INVALID_TEXT.to_string())),
    };

    let format = match object.get("format") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => AudioFormat::default(),
        Some(Value::String(s)) if s.is_empty() => AudioFormat::default(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => AudioFormat::default(),
        Some(Value::String(s)) if s == "mp3" => AudioFormat::Mp3,
        Some(Value::String(s)) if s == "wav" => AudioFormat::Wav,
        Some(_) => return Err(TtsServiceError::Invalid(INVALID_FORMAT.to_string())),
    };

    let voice = object
        .get("voice")
        .and_then(Value::as_str)
        .filter(|voice| !voice.is_empty())
        .unwrap_or(DEFAULT_VOICE);

    Ok(SynthesisRequest::new(text).with_voice(voice).with_format(format))
}
