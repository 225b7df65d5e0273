use http::StatusCode;
use kai_core::HttpError;
use thiserror::Error;

/// Errors from document rendering
#[derive(Debug, Error)]
pub enum ReportError {
    /// PDF assembly failed
    #[error("failed to build PDF document: {0}")]
    Pdf(#[from] printpdf::Error),
}

impl HttpError for ReportError {
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
