pub mod elevenlabs;
pub mod openai_tts;

use async_trait::async_trait;

use crate::types::{SpeechAudio, SpeechRequest};

/// Trait for speech-synthesis provider implementations
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Synthesize text to speech
    async fn synthesize(&self, request: &SpeechRequest) -> crate::error::Result<SpeechAudio>;

    /// Get the provider name
    fn name(&self) -> &str;
}
