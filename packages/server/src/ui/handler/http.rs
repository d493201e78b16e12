//! HTTP endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, ws::WebSocketUpgrade, ws::rejection::WebSocketUpgradeRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{infrastructure::dto::http::HealthDto, ui::state::AppState};

use super::websocket::upgrade;

/// Body served on `GET /` when the request is not a WebSocket upgrade
pub const INDEX_TEXT: &str = "WebSocket server running";

/// Root endpoint
///
/// Browsers open the chat socket on the root path, so an upgrade request is
/// accepted here too. A plain GET gets a short text body instead of a 426.
pub async fn index(
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match ws {
        Ok(ws) => upgrade(ws, state),
        Err(_) => INDEX_TEXT.into_response(),
    }
}

/// Favicon endpoint, always empty
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthDto> {
    Json(HealthDto::ok(state.router.peer_count().await))
}
