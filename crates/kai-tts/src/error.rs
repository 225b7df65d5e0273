use http::StatusCode;
use kai_core::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Errors from speech-synthesis providers
///
/// Every variant surfaces to API consumers as a generic internal failure;
/// the distinctions exist for logs.
#[derive(Debug, Error)]
pub enum TtsError {
    /// Request could not be sent or the connection failed
    #[error("connection error: {0}")]
    Connection(String),

    /// Provider rejected the configured credentials
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider rejected the synthesis request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider returned an unexpected error status
    #[error("provider returned {status}")]
    ProviderApi {
        status: u16,
        message: String,
    },

    /// Audio payload could not be read
    #[error("invalid synthesis response: {0}")]
    InvalidResponse(String),
}

impl HttpError for TtsError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_type(&self) -> &str {
        "internal_error"
    }

    fn client_message(&self) -> String {
        "an internal error occurred".to_owned()
    }
}
