//! UseCase: メッセージのファンアウトと接続数通知
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - BroadcastRouter::on_message / on_join / on_leave
//!
//! ### なぜこのテストが必要か
//! - 送信者を含む全接続に payload がそのまま届くことを保証する
//! - 一部の接続への書き込み失敗が他の接続への配送を妨げないことを保証する
//! - 接続数通知が登録集合の変更後の値であることを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：全接続が書き込み可能
//! - 異常系：書き込み不可の接続、書き込みエラーを返す接続
//! - エッジケース：接続ゼロ、未登録接続の切断

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::{
    domain::{ConnectionId, ConnectionRegistry, Outbound, Peer},
    infrastructure::dto::websocket::PeerCountNotice,
};

/// Outcome of one fan-out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Peers the payload was handed to
    pub delivered: usize,
    /// Peers skipped because their transport was not writable
    pub skipped: usize,
    /// Peers whose write returned an error
    pub failed: usize,
}

/// ブロードキャストのユースケース
///
/// Payloads are opaque text: the router never parses, validates or rewrites
/// them. Delivery is best-effort with no retry.
pub struct BroadcastRouter {
    /// ConnectionRegistry（接続集合の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
}

impl BroadcastRouter {
    /// 新しい BroadcastRouter を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Register a new connection, then announce the new peer count to every
    /// connection including the new one.
    ///
    /// Returns the count that was announced.
    pub async fn on_join(&self, id: ConnectionId, outbound: Arc<dyn Outbound>) -> usize {
        self.registry.add(id, outbound).await;
        tracing::info!("Connection '{}' joined", id);
        self.broadcast_peer_count().await
    }

    /// Unregister a connection, then announce the new peer count to the
    /// remaining connections.
    ///
    /// Leaving twice is harmless: the second call changes nothing and sends
    /// no notice. Returns the current count.
    pub async fn on_leave(&self, id: &ConnectionId) -> usize {
        if !self.registry.remove(id).await {
            tracing::debug!("Connection '{}' already left", id);
            return self.registry.size().await;
        }
        tracing::info!("Connection '{}' left", id);
        self.broadcast_peer_count().await
    }

    /// Relay `raw_payload` unmodified to every registered connection, the
    /// sender included.
    pub async fn on_message(&self, from: &ConnectionId, raw_payload: &str) -> DeliveryReport {
        let report = self.fan_out(raw_payload).await;
        tracing::debug!(
            "Relayed {} bytes from '{}': delivered={}, skipped={}, failed={}",
            raw_payload.len(),
            from,
            report.delivered,
            report.skipped,
            report.failed
        );
        report
    }

    /// Number of registered connections.
    pub async fn peer_count(&self) -> usize {
        self.registry.size().await
    }

    async fn broadcast_peer_count(&self) -> usize {
        let connected = self.registry.size().await;
        match serde_json::to_string(&PeerCountNotice::new(connected)) {
            Ok(json) => {
                self.fan_out(&json).await;
                tracing::debug!("Broadcasted peer count {}", connected);
            }
            Err(e) => tracing::error!("Failed to serialize peer count notice: {}", e),
        }
        connected
    }

    async fn fan_out(&self, payload: &str) -> DeliveryReport {
        let delivered = AtomicUsize::new(0);
        let skipped = AtomicUsize::new(0);
        let failed = AtomicUsize::new(0);

        self.registry
            .for_each(&|peer: &Peer| {
                if !peer.outbound.is_writable() {
                    tracing::debug!("Connection '{}' is not writable, skipping", peer.id);
                    skipped.fetch_add(1, Ordering::Relaxed);
                    return;
                }
                // ブロードキャストでは一部の送信失敗を許容
                match peer.outbound.send(payload) {
                    Ok(()) => {
                        delivered.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to push message to connection '{}': {}", peer.id, e);
                        failed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
            .await;

        DeliveryReport {
            delivered: delivered.into_inner(),
            skipped: skipped.into_inner(),
            failed: failed.into_inner(),
        }
    }
}
