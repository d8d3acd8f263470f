use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use profile::DataError;
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to fetch {resource}")]
    DataFetch {
        resource: &'static str,
        #[source]
        source: DataError,
    },

    #[error("Not found")]
    NotFound,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// API error body.
///
/// Fetch failures carry only `message`, which is what deck clients read.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ServerError {
    pub fn photos(source: DataError) -> Self {
        ServerError::DataFetch {
            resource: "photos",
            source,
        }
    }

    pub fn profile(source: DataError) -> Self {
        ServerError::DataFetch {
            resource: "profile",
            source,
        }
    }

    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::DataFetch { .. } | ServerError::Internal(_) | ServerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get error code string
    fn error_code(&self) -> Option<&'static str> {
        match self {
            ServerError::DataFetch { .. } => None,
            ServerError::NotFound => Some("NOT_FOUND"),
            ServerError::Internal(_) => Some("INTERNAL_ERROR"),
            ServerError::Config(_) => Some("CONFIG_ERROR"),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        if let ServerError::DataFetch { resource, source } = &self {
            tracing::error!(resource, error = %source, "data fetch failed");
            metrics::counter!("swipecard_fetch_failures_total", "resource" => *resource)
                .increment(1);
        }

        let status = self.status_code();
        let body = ErrorResponse {
            message: self.to_string(),
            code: self.error_code().map(str::to_string),
        };

        (status, Json(body)).into_response()
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}
