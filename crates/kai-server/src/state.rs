use std::time::Duration;

use kai_config::Config;
use kai_llm::ChatClient;
use kai_tts::Synthesizer;

use crate::store::MediaStore;

/// Shared read-only state for request handlers
///
/// Built once at startup from configuration; handlers receive it behind an
/// `Arc` and never mutate it.
pub struct AppState {
    pub chat: ChatClient,
    pub synthesizer: Synthesizer,
    pub store: MediaStore,
    /// Upstream timeout applied to summary completions only
    pub summary_timeout: Duration,
}

impl AppState {
    /// Initialize provider clients and storage from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a provider credential is missing or the storage
    /// directories cannot be created
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let chat = ChatClient::new(&config.llm)?;
        let synthesizer = Synthesizer::from_config(&config.tts)?;
        let store = MediaStore::new(&config.storage).await?;

        Ok(Self {
            chat,
            synthesizer,
            store,
            summary_timeout: Duration::from_secs(config.llm.summary_timeout_seconds),
        })
    }
}
