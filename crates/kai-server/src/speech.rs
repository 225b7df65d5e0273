use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Arbitrary text to speak (e.g. a scripted greeting)
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: String,
}

/// Relative URL of the synthesized audio
#[derive(Debug, Serialize)]
pub struct SpeechResponse {
    pub audio_url: String,
}

/// Handle `POST /api/tts`
///
/// The one endpoint with request validation: blank text is rejected
/// before any provider call is made.
pub async fn handle_speech(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SpeechRequest>,
) -> Result<Json<SpeechResponse>, ApiError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(ApiError::InvalidRequest("text must not be empty".to_string()));
    }

    let speech = state.synthesizer.speak(text).await?;
    let audio_url = state.store.save_audio(&speech.audio).await?;

    tracing::debug!(text_len = text.len(), %audio_url, "speech synthesized");

    Ok(Json(SpeechResponse { audio_url }))
}
