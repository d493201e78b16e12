//! Domain error types.

use thiserror::Error;

/// Failure to hand a payload to a single peer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The peer's transport is already closed
    #[error("transport is not writable")]
    NotWritable,

    /// The write itself failed
    #[error("write failed: {0}")]
    WriteFailed(String),
}
