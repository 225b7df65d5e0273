use kai_config::{TtsConfig, TtsProviderType};

use crate::{
    provider::{TtsProvider, elevenlabs::ElevenLabsProvider, openai_tts::OpenAiTtsProvider},
    types::{SpeechAudio, SpeechRequest},
};

/// Default `ElevenLabs` synthesis model
const DEFAULT_ELEVENLABS_MODEL: &str = "eleven_multilingual_v2";
/// Default `OpenAI` synthesis model
const DEFAULT_OPENAI_MODEL: &str = "tts-1";

/// Synthesis front that carries the configured voice and model
///
/// Every endpoint speaks with the same voice; only the text varies.
pub struct Synthesizer {
    provider: Box<dyn TtsProvider>,
    voice: String,
    model: String,
}

impl Synthesizer {
    /// Build the synthesizer from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key or voice identifier is missing.
    pub fn from_config(config: &TtsConfig) -> anyhow::Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("synthesis provider API key is required"))?;

        if config.voice.trim().is_empty() {
            anyhow::bail!("synthesis voice identifier is required");
        }

        let (provider, default_model): (Box<dyn TtsProvider>, &str) = match config.provider_type {
            TtsProviderType::Elevenlabs => (
                Box::new(ElevenLabsProvider::new(api_key, config.base_url.clone())),
                DEFAULT_ELEVENLABS_MODEL,
            ),
            TtsProviderType::OpenaiTts => (
                Box::new(OpenAiTtsProvider::new(api_key, config.base_url.clone())),
                DEFAULT_OPENAI_MODEL,
            ),
        };

        tracing::debug!("initialized synthesis provider: {}", provider.name());

        Ok(Self {
            provider,
            voice: config.voice.clone(),
            model: config.model.clone().unwrap_or_else(|| default_model.to_string()),
        })
    }

    /// Synthesize speech for the given text with the configured voice
    pub async fn speak(&self, text: &str) -> crate::error::Result<SpeechAudio> {
        let request = SpeechRequest {
            text: text.to_string(),
            voice: self.voice.clone(),
            model: self.model.clone(),
        };

        self.provider.synthesize(&request).await
    }
}
