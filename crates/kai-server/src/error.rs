use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use kai_core::HttpError;
use kai_llm::ChatError;
use kai_report::ReportError;
use kai_tts::TtsError;
use thiserror::Error;

/// Error surface of the API endpoints
///
/// Wrapped provider errors keep their own HTTP mapping; everything local
/// (file writes, demoted failures) collapses to a generic internal error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Chat-completion provider failed
    #[error(transparent)]
    Chat(#[from] ChatError),

    /// Speech synthesis failed
    #[error(transparent)]
    Synthesis(#[from] TtsError),

    /// Document rendering failed
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Generated file could not be written
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Client sent an invalid request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Any other failure, reported without detail
    #[error("internal error: {0}")]
    Internal(String),
}

impl HttpError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Chat(e) => e.status_code(),
            Self::Synthesis(e) => e.status_code(),
            Self::Report(e) => e.status_code(),
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Chat(e) => e.error_type(),
            Self::Synthesis(e) => e.error_type(),
            Self::Report(e) => e.error_type(),
            Self::Storage(_) | Self::Internal(_) => "internal_error",
            Self::InvalidRequest(_) => "invalid_request_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Chat(e) => e.client_message(),
            Self::Synthesis(e) => e.client_message(),
            Self::Report(e) => e.client_message(),
            Self::Storage(_) | Self::Internal(_) => "an internal error occurred".to_owned(),
            Self::InvalidRequest(message) => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": {
                "message": self.client_message(),
                "type": self.error_type(),
            }
        });

        (status, Json(body)).into_response()
    }
}
