//! API errors

use thiserror::Error;

/// Failure of one backend call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never got a response
    #[error("network error: {0}")]
    Network(String),

    /// Response with a status outside 200/201/204
    #[error("HTTP error! status: {status}")]
    Status { status: u16, message: Option<String> },

    /// Body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Backend down or deliberately unavailable
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Status { status: 503, .. })
    }

    /// Backend-provided message when there is one
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
