mod conversation;
mod cors;
mod error;
mod health;
mod prompt;
mod speech;
mod state;
mod store;
mod summary;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing};
use kai_config::Config;
use tower_http::{services::ServeDir, trace::TraceLayer};

use state::AppState;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Provider clients and the media store are constructed once here and
    /// shared read-only by every request handler.
    ///
    /// # Errors
    ///
    /// Returns an error if provider initialization or storage directory
    /// creation fails
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)));

        let state = Arc::new(AppState::from_config(&config).await?);

        let api = Router::new()
            .route("/api/conversation", routing::post(conversation::handle_conversation))
            .route("/api/summary", routing::post(summary::handle_summary))
            .route("/api/summary_pdf", routing::post(summary::handle_summary_pdf))
            .route("/api/tts", routing::post(speech::handle_speech))
            .with_state(state);

        let mut app = Router::new().merge(api);

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, routing::get(health::health_handler));
        }

        // Generated audio and documents
        app = app.nest_service(&config.storage.public_path, ServeDir::new(&config.storage.root));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS
        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
