//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::{IntoResponse, Response},
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::ConnectionId, infrastructure::outbound::WebSocketOutbound, ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    upgrade(ws, state)
}

pub(super) fn upgrade(ws: WebSocketUpgrade, state: Arc<AppState>) -> Response {
    ws.on_failed_upgrade(|e| tracing::warn!("WebSocket upgrade failed: {}", e))
        .on_upgrade(move |socket| handle_socket(socket, state))
        .into_response()
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// The task ends when the channel closes or a write fails. Once it ends the
/// receiver is dropped, so the connection's `WebSocketOutbound` reports
/// itself as not writable.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
    connection_id: ConnectionId,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if let Err(e) = sender.send(Message::Text(msg.into())).await {
                tracing::warn!("Failed to write to connection '{}': {}", connection_id, e);
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionId::generate();
    let (sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive broadcasts
    let (tx, rx) = mpsc::unbounded_channel();
    let connected = state
        .router
        .on_join(connection_id, Arc::new(WebSocketOutbound::new(tx)))
        .await;
    tracing::info!(
        "Client connected as '{}' ({} online)",
        connection_id,
        connected
    );

    let router = state.router.clone();

    // Spawn a task to relay messages from this connection
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    router.on_message(&connection_id, text.as_str()).await;
                }
                Message::Binary(data) => match std::str::from_utf8(&data) {
                    Ok(text) => {
                        router.on_message(&connection_id, text).await;
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Dropping connection '{}' after non UTF-8 frame: {}",
                            connection_id,
                            e
                        );
                        break;
                    }
                },
                Message::Ping(_) => {
                    tracing::debug!("Received ping from '{}'", connection_id);
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", connection_id);
                    break;
                }
                Message::Pong(_) => {}
            }
        }
    });

    // Spawn a task to push broadcasts to this connection
    let mut send_task = pusher_loop(rx, sender, connection_id);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    let remaining = state.router.on_leave(&connection_id).await;
    tracing::info!(
        "Client '{}' disconnected ({} online)",
        connection_id,
        remaining
    );
}
