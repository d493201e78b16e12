//! HTTP and WebSocket handlers.

pub mod http;
pub mod websocket;

pub use http::{favicon, health_check, index};
pub use websocket::websocket_handler;
