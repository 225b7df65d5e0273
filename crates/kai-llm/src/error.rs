use http::StatusCode;
use kai_core::HttpError;
use thiserror::Error;

/// Errors from the chat-completion provider
#[derive(Debug, Error)]
pub enum ChatError {
    /// Upstream returned a non-success HTTP status
    #[error("upstream returned {status}")]
    UpstreamStatus {
        status: u16,
        message: String,
    },

    /// Request could not be sent or the connection failed
    #[error("connection error: {0}")]
    Connection(String),

    /// Upstream body could not be decoded
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}

impl HttpError for ChatError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UpstreamStatus { .. } => StatusCode::BAD_GATEWAY,
            Self::Connection(_) | Self::InvalidResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::UpstreamStatus { .. } => "upstream_error",
            Self::Connection(_) | Self::InvalidResponse(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::UpstreamStatus { .. } => "upstream AI service error".to_owned(),
            Self::Connection(_) | Self::InvalidResponse(_) => "an internal error occurred".to_owned(),
        }
    }
}
