//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// No rendered message at the given position
    #[error("No message #{0} to reply to")]
    MessageNotFound(usize),

    /// Requested color is not part of the palette
    #[error("Unknown color '{0}', expected one of: {1}")]
    UnknownColor(String, String),

    /// Outgoing payload could not be encoded
    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A received frame that is neither a chat payload nor a peer-count notice
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),
}
