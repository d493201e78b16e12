//! Server state shared by the handlers.

use std::sync::Arc;

use crate::usecase::BroadcastRouter;

/// Shared application state
pub struct AppState {
    /// BroadcastRouter（ファンアウトと接続数通知のユースケース）
    pub router: Arc<BroadcastRouter>,
}
