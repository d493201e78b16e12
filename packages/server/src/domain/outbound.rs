//! Outbound transport seam.

use super::DeliveryError;

/// Write side of one connection.
///
/// The router only needs to know whether a peer can currently accept a frame
/// and to hand it a text payload; the concrete transport lives in the
/// infrastructure layer.
#[cfg_attr(test, mockall::automock)]
pub trait Outbound: Send + Sync {
    /// Whether the transport can still accept frames.
    fn is_writable(&self) -> bool;

    /// Queue `payload` for delivery to this peer.
    fn send(&self, payload: &str) -> Result<(), DeliveryError>;
}
