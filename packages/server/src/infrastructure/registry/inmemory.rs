//! InMemory ConnectionRegistry 実装
//!
//! ドメイン層が定義する ConnectionRegistry trait の具体的な実装。
//! HashMap をプロセス内の接続集合として使用します。
//!
//! 各メソッドは 1 回のロック取得で完結します。ブロードキャストは
//! `snapshot` でロック中に複製した集合に対して行い、書き込み中はロックを
//! 保持しません。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, ConnectionRegistry, Outbound, Peer};

/// インメモリ ConnectionRegistry 実装
pub struct InMemoryConnectionRegistry {
    /// 接続中のコネクション
    ///
    /// Key: ConnectionId
    /// Value: その接続の Outbound
    peers: Arc<Mutex<HashMap<ConnectionId, Arc<dyn Outbound>>>>,
}

impl InMemoryConnectionRegistry {
    /// 空の InMemoryConnectionRegistry を作成
    pub fn new() -> Self {
        Self {
            peers: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn add(&self, id: ConnectionId, outbound: Arc<dyn Outbound>) {
        let mut peers = self.peers.lock().await;
        if peers.insert(id, outbound).is_some() {
            tracing::warn!("Connection '{}' was already registered, replaced", id);
        } else {
            tracing::debug!("Connection '{}' registered", id);
        }
    }

    async fn remove(&self, id: &ConnectionId) -> bool {
        let mut peers = self.peers.lock().await;
        let removed = peers.remove(id).is_some();
        if removed {
            tracing::debug!("Connection '{}' unregistered", id);
        }
        removed
    }

    async fn snapshot(&self) -> Vec<Peer> {
        let peers = self.peers.lock().await;
        peers
            .iter()
            .map(|(id, outbound)| Peer {
                id: *id,
                outbound: Arc::clone(outbound),
            })
            .collect()
    }

    async fn size(&self) -> usize {
        self.peers.lock().await.len()
    }
}
