//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use kai_config::{Config, HealthConfig, LlmConfig, ServerConfig, StorageConfig, TtsConfig};
use secrecy::SecretString;
use tempfile::TempDir;

/// Builder for constructing test configurations
///
/// Provider credentials default to dummies so state construction always
/// succeeds; point the base URLs at mock backends to exercise traffic.
pub struct ConfigBuilder {
    config: Config,
    storage_dir: TempDir,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        let storage_dir = TempDir::new().expect("create storage dir");

        let config = Config {
            server: ServerConfig {
                listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                health: HealthConfig {
                    enabled: true,
                    ..HealthConfig::default()
                },
                cors: None,
            },
            llm: LlmConfig {
                base_url: None,
                api_key: Some(SecretString::from("test-chat-key")),
                model: "mock-model".to_owned(),
                summary_timeout_seconds: 5,
            },
            tts: TtsConfig {
                api_key: Some(SecretString::from("test-voice-key")),
                voice: "test-voice".to_owned(),
                ..TtsConfig::default()
            },
            storage: StorageConfig {
                root: storage_dir.path().to_path_buf(),
                ..StorageConfig::default()
            },
        };

        Self { config, storage_dir }
    }

    /// Point the chat client at a mock backend
    pub fn with_chat_backend(mut self, base_url: &str) -> Self {
        self.config.llm.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Point the synthesis provider at a mock backend
    pub fn with_tts_backend(mut self, base_url: &str) -> Self {
        self.config.tts.base_url = Some(base_url.to_owned());
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    ///
    /// Also returns the storage directory guard; hold it for the duration
    /// of the test so generated files have somewhere to land.
    pub fn build(self) -> (Config, TempDir) {
        (self.config, self.storage_dir)
    }
}
