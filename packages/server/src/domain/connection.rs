//! Connection handle value object.

use std::fmt;

use uuid::Uuid;

/// Opaque handle for one open duplex channel.
///
/// The server assigns no user identity; this id only distinguishes
/// connections inside the registry and in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Generate a fresh random connection id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for ConnectionId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_returns_distinct_ids() {
        // テスト項目: 生成した ConnectionId は毎回異なる
        // given (前提条件):

        // when (操作):
        let a = ConnectionId::generate();
        let b = ConnectionId::generate();

        // then (期待する結果):
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_compare_by_value() {
        // テスト項目: 同じ UUID から作られた ConnectionId は等しい
        // given (前提条件):
        let uuid = Uuid::new_v4();

        // when (操作):
        let a = ConnectionId::from(uuid);
        let b = ConnectionId::from(uuid);

        // then (期待する結果):
        assert_eq!(a, b);
        assert_eq!(a.to_string(), uuid.to_string());
    }
}
