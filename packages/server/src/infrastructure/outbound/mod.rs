//! Outbound の実装
//!
//! - `websocket`: WebSocket 送信タスクへ mpsc チャンネルで渡す実装

pub mod websocket;

pub use websocket::{PusherChannel, WebSocketOutbound};
