use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::TtsError,
    http_client::http_client,
    types::{SpeechAudio, SpeechRequest},
};

use super::TtsProvider;

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// `OpenAI` synthesis provider
pub(crate) struct OpenAiTtsProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl OpenAiTtsProvider {
    pub fn new(api_key: SecretString, base_url: Option<String>) -> Self {
        let client = http_client();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string());

        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[derive(serde::Serialize)]
struct OpenAiTtsRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
}

#[async_trait]
impl TtsProvider for OpenAiTtsProvider {
    async fn synthesize(&self, request: &SpeechRequest) -> crate::error::Result<SpeechAudio> {
        let url = format!("{}/audio/speech", self.base_url);

        tracing::debug!(
            "OpenAI TTS synthesis request: model={}, voice={}, text_len={}",
            request.model,
            request.voice,
            request.text.len(),
        );

        let body = OpenAiTtsRequest {
            model: &request.model,
            input: &request.text,
            voice: &request.voice,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI TTS request failed: {e}");
                TtsError::Connection(format!("Failed to send request to OpenAI TTS: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("OpenAI TTS API error ({status}): {error_text}");

            return Err(match status.as_u16() {
                401 => TtsError::AuthenticationFailed(error_text),
                400 => TtsError::InvalidRequest(error_text),
                _ => TtsError::ProviderApi {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read OpenAI TTS response body: {e}");
            TtsError::InvalidResponse(e.to_string())
        })?;

        tracing::debug!("OpenAI TTS synthesis complete, {} bytes", audio.len());

        Ok(SpeechAudio {
            audio: audio.to_vec(),
            content_type,
        })
    }

    fn name(&self) -> &str {
        "openai_tts"
    }
}
