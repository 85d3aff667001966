//! Error types for the Vision client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Substrings the backend puts in its error message while a job is queued
///
/// The result endpoint reports an unfinished job as a failed query
/// ("查询失败: ...") and may mention the `ON_QUEUE` task state.
pub const QUEUE_MARKERS: [&str; 2] = ["查询失败", "ON_QUEUE"];

/// Errors that can occur when using the Vision client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Backend answered with a non-success envelope code
    #[error("Request rejected (code {code}): {message}")]
    Rejected {
        /// Envelope code
        code: i32,
        /// Envelope message
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Create a rejection from an envelope code and message
    pub fn rejected(code: i32, message: impl Into<String>) -> Self {
        Self::Rejected {
            code,
            message: message.into(),
        }
    }

    /// Check if this error only says the job is still queued or processing
    pub fn is_queue_pending(&self) -> bool {
        match self {
            Self::Rejected { message, .. } | Self::ApiError { message, .. } => {
                QUEUE_MARKERS.iter().any(|marker| message.contains(marker))
            }
            _ => false,
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}
