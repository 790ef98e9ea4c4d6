//! Error types for the classification service client

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the client
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
        /// Exception name reported by the service, e.g. `ResourceNotFoundException`
        code: Option<String>,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Error body returned by the service alongside a non-2xx status
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    #[serde(rename = "__type")]
    kind: Option<String>,
    #[serde(alias = "message")]
    #[serde(rename = "Message")]
    message: Option<String>,
}

impl ClientError {
    fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            code: None,
            message: message.into(),
        }
    }

    /// Create an API error from a raw response body
    ///
    /// The service reports `{"__type": "...", "Message": "..."}`; anything else
    /// is kept verbatim as the message.
    pub fn from_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ServiceErrorBody>(body) {
            Ok(parsed) if parsed.kind.is_some() || parsed.message.is_some() => {
                // `__type` may carry a namespace prefix: "prefix#ExceptionName"
                let code = parsed
                    .kind
                    .map(|k| k.rsplit('#').next().unwrap_or_default().to_string());
                let message = parsed
                    .message
                    .or_else(|| code.clone())
                    .unwrap_or_else(|| "Unknown error".to_string());
                Self::ApiError {
                    status,
                    code,
                    message,
                }
            }
            _ => Self::api_error(status, body),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
            || matches!(self, Self::ApiError { code: Some(code), .. } if code == "ResourceNotFoundException")
    }

}
