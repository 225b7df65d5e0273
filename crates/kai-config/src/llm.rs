use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Chat-completion provider configuration
///
/// The upstream is any OpenAI-compatible chat completions API; the default
/// base URL points at the hosted router the production deployment uses.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible API
    #[serde(default)]
    pub base_url: Option<Url>,
    /// API key for authentication
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Model identifier sent with every completion request
    #[serde(default = "default_model")]
    pub model: String,
    /// Upstream timeout for summary requests, in seconds
    #[serde(default = "default_summary_timeout")]
    pub summary_timeout_seconds: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            model: default_model(),
            summary_timeout_seconds: default_summary_timeout(),
        }
    }
}

fn default_model() -> String {
    "google/gemini-1.5-flash-latest".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_summary_timeout() -> u64 {
    60
}
