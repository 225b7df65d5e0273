#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
pub mod llm;
mod loader;
pub mod server;
pub mod storage;
pub mod tts;

use serde::Deserialize;

pub use cors::CorsConfig;
pub use health::HealthConfig;
pub use llm::LlmConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;
pub use tts::{TtsConfig, TtsProviderType};

/// Top-level Kai backend configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Chat-completion provider configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Speech-synthesis provider configuration
    #[serde(default)]
    pub tts: TtsConfig,
    /// Generated-file storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}
