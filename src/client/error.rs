#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The Engine could not be reached or its response could not be read
    #[error("Engine request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The Engine answered with a non-success status
    #[error("{message}")]
    Relay { status: u16, message: String },

    /// A chunked part carried audio that is not valid base64
    #[error("Part {index} has invalid audio data: {source}")]
    Decode {
        index: usize,
        #[source]
        source: base64::DecodeError,
    },
}

impl ClientError {
    /// HTTP status reported by the Engine, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Relay { status, .. } => Some(*status),
            ClientError::Http(err) => err.status().map(|s| s.as_u16()),
            ClientError::Decode { .. } => None,
        }
    }
}
