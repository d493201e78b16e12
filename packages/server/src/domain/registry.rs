//! ConnectionRegistry trait 定義
//!
//! ドメイン層が必要とする接続集合へのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use std::sync::Arc;

use async_trait::async_trait;

use super::{ConnectionId, Outbound};

/// A registered connection: its handle plus the write side of its transport.
#[derive(Clone)]
pub struct Peer {
    pub id: ConnectionId,
    pub outbound: Arc<dyn Outbound>,
}

/// The live set of open connections.
///
/// Every call is one critical section. Iteration works on a snapshot, so a
/// broadcast that is in progress when a peer leaves never fails; it may or
/// may not include the leaving peer.
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Register a connection. Re-adding an id replaces its outbound handle.
    async fn add(&self, id: ConnectionId, outbound: Arc<dyn Outbound>);

    /// Unregister a connection. Returns `false` when it was not a member.
    async fn remove(&self, id: &ConnectionId) -> bool;

    /// Copy of the current membership.
    async fn snapshot(&self) -> Vec<Peer>;

    /// Number of registered connections.
    async fn size(&self) -> usize;

    /// Run `action` for every connection registered at call time.
    async fn for_each(&self, action: &(dyn for<'p> Fn(&'p Peer) + Send + Sync)) {
        for peer in self.snapshot().await {
            action(&peer);
        }
    }
}
