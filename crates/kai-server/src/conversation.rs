use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use kai_llm::extract;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::prompt::{self, Turn};
use crate::state::AppState;

/// One conversational turn from the client
#[derive(Debug, Deserialize)]
pub struct ConversationRequest {
    /// Current user utterance
    pub text: String,
    /// Transcript so far, oldest first
    #[serde(default)]
    pub history: Vec<Turn>,
}

/// Assistant reply plus its spoken rendition
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub text: String,
    pub audio_url: String,
}

/// Handle `POST /api/conversation`
///
/// Chat completion, then speech synthesis, then one file write. An
/// unextractable reply degrades to the fixed fallback line rather than
/// failing the turn.
pub async fn handle_conversation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConversationRequest>,
) -> Result<Json<ConversationResponse>, ApiError> {
    let messages = prompt::conversation_messages(&request.text, &request.history);

    tracing::debug!(message_count = messages.len(), "forwarding conversation upstream");

    let completion = state.chat.complete(messages, None).await?;

    let mut text = extract::assistant_text(&completion);
    if text.trim().is_empty() {
        tracing::warn!("no reply text extractable; using fallback");
        text = prompt::FALLBACK_REPLY.to_string();
    }

    let speech = state.synthesizer.speak(&text).await?;
    let audio_url = state.store.save_audio(&speech.audio).await?;

    tracing::debug!(reply_len = text.len(), %audio_url, "conversation turn complete");

    Ok(Json(ConversationResponse { text, audio_url }))
}
