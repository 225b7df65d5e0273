use secrecy::SecretString;
use serde::Deserialize;

/// Speech-synthesis provider configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Provider type
    #[serde(rename = "type", default)]
    pub provider_type: TtsProviderType,
    /// API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Voice identifier used for all synthesis
    #[serde(default)]
    pub voice: String,
    /// Synthesis model override (provider-specific default when unset)
    #[serde(default)]
    pub model: Option<String>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Supported TTS providers
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtsProviderType {
    /// `ElevenLabs`
    #[default]
    Elevenlabs,
    /// `OpenAI` TTS
    OpenaiTts,
}
