use reqwest::StatusCode;

/// Ошибки обращения к бэкенду бронирований.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: connect refused, reset, TLS, etc.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("HTTP error! status: {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Status reported by the backend, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
