use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::{
    domain::tts::{
        validate_tts_input, validation::INVALID_BODY, ChunkedSynthesisResponse, SynthesisRequest,
        TtsService, TtsServiceApi,
    },
    error::{AppError, AppResult},
    infrastructure::http::MAX_BODY_BYTES,
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /openai/tts - Convert text to speech in one provider request
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        payload: Result<Json<Value>, JsonRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let request = parse_request(payload)?;

        let result = controller.tts_service.synthesize(request).await?;

        let content_type = HeaderValue::from_str(&result.content_type).map_err(|_| {
            AppError::BadGateway(format!(
                "OpenAI returned an invalid content type: {}",
                result.content_type
            ))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, content_type);

        Ok((StatusCode::OK, headers, Body::from(result.audio_data)))
    }

    /// POST /openai/tts-chunked - Split long text and synthesize every chunk
    pub async fn synthesize_chunked(
        State(controller): State<Arc<TtsController>>,
        payload: Result<Json<Value>, JsonRejection>,
    ) -> AppResult<Json<ChunkedSynthesisResponse>> {
        let request = parse_request(payload)?;

        let parts = controller.tts_service.synthesize_chunked(request).await?;

        Ok(Json(ChunkedSynthesisResponse { parts }))
    }
}

fn parse_request(payload: Result<Json<Value>, JsonRejection>) -> AppResult<SynthesisRequest> {
    let body = match payload {
        Ok(Json(body)) => body,
        // Without a JSON content type the body is never parsed, so it counts as empty
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(Map::new()),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::debug!(error = %rejection, "Rejected oversized TTS request body");
            return Err(AppError::PayloadTooLarge(format!(
                "Request body exceeds {}mb.",
                MAX_BODY_BYTES / (1024 * 1024)
            )));
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected TTS request body");
            return Err(AppError::BadRequest(INVALID_BODY.to_string()));
        }
    };

    Ok(validate_tts_input(&body)?)
}
