use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use kai_config::LlmConfig;

use crate::error::ChatError;
use crate::protocol::{ChatCompletion, ChatMessage, ChatRequest};

/// Default OpenAI-compatible router URL
const DEFAULT_BASE_URL: &str = "https://router.requesty.ai/v1";

/// Client for an OpenAI-compatible chat completions API
///
/// Constructed once at startup and shared by all request handlers.
pub struct ChatClient {
    client: Client,
    base_url: Url,
    api_key: SecretString,
    model: String,
}

impl ChatClient {
    /// Create from provider configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing from configuration.
    pub fn new(config: &LlmConfig) -> anyhow::Result<Self> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL).expect("valid default URL"));

        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("chat provider API key is required"))?;

        Ok(Self {
            client: Client::new(),
            base_url,
            api_key,
            model: config.model.clone(),
        })
    }

    /// Model identifier sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }

    /// Send a completion request
    ///
    /// The optional timeout bounds the whole upstream round trip; when
    /// `None`, the call waits as long as the connection stays open.
    ///
    /// # Errors
    ///
    /// `UpstreamStatus` when the provider answers with a non-success HTTP
    /// status; `Connection`/`InvalidResponse` for transport and decode
    /// failures.
    pub async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        timeout: Option<Duration>,
    ) -> Result<ChatCompletion, ChatError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
        };

        let mut builder = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "upstream request failed");
            ChatError::Connection(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "upstream returned error");
            return Err(ChatError::UpstreamStatus {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ChatError::InvalidResponse(e.to_string()))
    }
}
