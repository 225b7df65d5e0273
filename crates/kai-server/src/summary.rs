use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use kai_llm::extract;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::prompt::{self, Turn};
use crate::state::AppState;

/// Document title for rendered summaries
const SUMMARY_TITLE: &str = "Session Summary";

/// Full transcript to summarize
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub history: Vec<Turn>,
}

/// Markdown summary text
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary_text: String,
}

/// Relative URL of the rendered summary document
#[derive(Debug, Serialize)]
pub struct SummaryPdfResponse {
    pub pdf_url: String,
}

/// Handle `POST /api/summary`
///
/// The one endpoint with a bounded upstream timeout; transcripts get long
/// and an unbounded summary call would hold the client indefinitely.
pub async fn handle_summary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let summary_text = summarize(&state, &request.history).await?;

    Ok(Json(SummaryResponse { summary_text }))
}

/// Handle `POST /api/summary_pdf`
///
/// Same upstream call as the raw summary, then Markdown-to-PDF rendering.
/// Every failure here, upstream ones included, reports as internal.
pub async fn handle_summary_pdf(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryPdfResponse>, ApiError> {
    let summary_text = summarize(&state, &request.history)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let blocks = kai_report::parse_blocks(&summary_text);
    let document = kai_report::render_pdf(SUMMARY_TITLE, &blocks)?;

    let pdf_url = state.store.save_document(&document).await?;

    tracing::debug!(%pdf_url, "summary document rendered");

    Ok(Json(SummaryPdfResponse { pdf_url }))
}

/// Run the summary completion and extract its text
async fn summarize(state: &AppState, history: &[Turn]) -> Result<String, ApiError> {
    let messages = prompt::summary_messages(history);

    tracing::debug!(message_count = messages.len(), "forwarding summary upstream");

    let completion = state.chat.complete(messages, Some(state.summary_timeout)).await?;

    let text = extract::assistant_text(&completion);
    if text.trim().is_empty() {
        tracing::warn!("no summary text extractable; using fallback");
        return Ok(prompt::FALLBACK_SUMMARY.to_string());
    }

    Ok(text)
}
