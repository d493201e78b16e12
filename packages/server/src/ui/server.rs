//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::usecase::BroadcastRouter;

use super::{
    handler::{favicon, health_check, index, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket chat server
///
/// # Example
///
/// ```ignore
/// let registry = Arc::new(InMemoryConnectionRegistry::new());
/// let server = Server::new(Arc::new(BroadcastRouter::new(registry)));
/// server.run("0.0.0.0".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// BroadcastRouter（ファンアウトと接続数通知のユースケース）
    router: Arc<BroadcastRouter>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(router: Arc<BroadcastRouter>) -> Self {
        Self { router }
    }

    /// Build the axum application.
    pub fn app(&self) -> Router {
        let app_state = Arc::new(AppState {
            router: self.router.clone(),
        });

        Router::new()
            // WebSocket エンドポイント（ルートでもアップグレードを受け付ける）
            .route("/", get(index))
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/favicon.ico", get(favicon))
            .route("/api/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Bind `host:port` and serve until Ctrl+C or SIGTERM.
    ///
    /// Fails when the address cannot be bound or the server stops with an
    /// I/O error.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.app();

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Tagarela listening on {}", local_addr);
        tracing::info!("Chat endpoint: ws://{}/ws", local_addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
