//! WebSocket を使った Outbound 実装
//!
//! ## 責務
//!
//! - WebSocket 送信タスクに繋がる `UnboundedSender` を保持
//! - 送信タスクが終了している（受信側が drop された）場合は書き込み不可と判定
//!
//! ## 設計ノート
//!
//! WebSocket の生成と送信ループは UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は UI 層が生成した sender を受け取り、Router からの送信に使用します。

use tokio::sync::mpsc;

use crate::domain::{DeliveryError, Outbound};

/// Channel feeding one connection's WebSocket pusher loop
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// WebSocket の送信タスクに payload を渡す Outbound
#[derive(Debug, Clone)]
pub struct WebSocketOutbound {
    sender: PusherChannel,
}

impl WebSocketOutbound {
    pub fn new(sender: PusherChannel) -> Self {
        Self { sender }
    }
}

impl Outbound for WebSocketOutbound {
    fn is_writable(&self) -> bool {
        !self.sender.is_closed()
    }

    fn send(&self, payload: &str) -> Result<(), DeliveryError> {
        self.sender
            .send(payload.to_string())
            .map_err(|e| DeliveryError::WriteFailed(e.to_string()))
    }
}
