use crate::error::AppError;
use crate::infrastructure::repositories::TtsRepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    Upstream(String),
}

impl From<TtsRepositoryError> for TtsServiceError {
    fn from(err: TtsRepositoryError) -> Self {
        match err {
            TtsRepositoryError::Configuration(msg) => TtsServiceError::Configuration(msg),
            TtsRepositoryError::Upstream(msg) => TtsServiceError::Upstream(msg),
        }
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Configuration(msg) => AppError::Configuration(msg),
            TtsServiceError::Upstream(msg) => AppError::BadGateway(msg),
        }
    }
}
