//! Utilities shared by the Tagarela server and client.

pub mod logger;
pub mod time;
