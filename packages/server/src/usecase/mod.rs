//! UseCase 層
//!
//! - `broadcast_router`: 受信メッセージのファンアウトと接続数通知

mod broadcast_router;

pub use broadcast_router::{BroadcastRouter, DeliveryReport};
