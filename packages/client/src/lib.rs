//! Tagarela chat client.
//!
//! The session core ([`session::ChatSession`]) owns the reply-compose state,
//! the local echo set and the rendered message list, and is driven through a
//! single event dispatch. The terminal front-end in [`ui`] and [`runner`]
//! feeds it input lines and server frames.

pub mod domain;
pub mod error;
pub mod renderer;
pub mod runner;
pub mod session;
pub mod ui;

pub use runner::run_client;
