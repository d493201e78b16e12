//! Domain layer: connection identity, outbound transport seam and the
//! connection registry interface.

mod connection;
mod error;
mod outbound;
mod registry;

pub use connection::ConnectionId;
pub use error::DeliveryError;
pub use outbound::Outbound;
#[cfg(test)]
pub use outbound::MockOutbound;
pub use registry::{ConnectionRegistry, Peer};
