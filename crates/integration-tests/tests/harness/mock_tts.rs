//! Mock speech-synthesis backend for integration tests
//!
//! Speaks just enough of the `ElevenLabs` surface: a text-to-speech route
//! keyed by voice that answers with fixed audio bytes

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Audio payload every successful synthesis returns
pub const MOCK_AUDIO: &[u8] = b"ID3mock-audio-bytes";

/// Mock synthesis backend
pub struct MockTts {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockTtsState>,
}

struct MockTtsState {
    synthesis_count: AtomicU32,
    /// Number of requests to fail before succeeding (0 = never fail)
    fail_count: AtomicU32,
    /// Voice from the most recent synthesis request
    last_voice: Mutex<Option<String>>,
}

impl MockTts {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(0).await
    }

    /// Start a mock server that fails the first `n` requests with 500
    pub async fn start_failing(n: u32) -> anyhow::Result<Self> {
        Self::start_inner(n).await
    }

    async fn start_inner(fail_count: u32) -> anyhow::Result<Self> {
        let state = Arc::new(MockTtsState {
            synthesis_count: AtomicU32::new(0),
            fail_count: AtomicU32::new(fail_count),
            last_voice: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/text-to-speech/{voice}", routing::post(handle_synthesis))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the synthesis provider
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of synthesis requests received
    pub fn synthesis_count(&self) -> u32 {
        self.state.synthesis_count.load(Ordering::Relaxed)
    }

    /// Voice from the most recent synthesis request
    pub fn last_voice(&self) -> Option<String> {
        self.state.last_voice.lock().unwrap().clone()
    }
}

impl Drop for MockTts {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

// -- Handler --

async fn handle_synthesis(
    State(state): State<Arc<MockTtsState>>,
    Path(voice): Path<String>,
    Json(_body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.synthesis_count.fetch_add(1, Ordering::Relaxed);
    *state.last_voice.lock().unwrap() = Some(voice);

    let remaining = state.fail_count.load(Ordering::Relaxed);
    if remaining > 0 {
        state.fail_count.fetch_sub(1, Ordering::Relaxed);
        return (StatusCode::INTERNAL_SERVER_ERROR, "mock synthesis failure").into_response();
    }

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "audio/mpeg")],
        MOCK_AUDIO,
    )
        .into_response()
}
