//! Tagarela broadcast chat server.
//!
//! Every text frame received on a WebSocket connection is relayed verbatim to
//! all open connections, the sender included. Membership changes are
//! announced with a peer-count notice.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
