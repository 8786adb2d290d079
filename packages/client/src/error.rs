//! Error types for the relay client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Why a local send was rejected before touching the wire.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SendError {
    /// No room is synced yet; outgoing messages have nowhere to go.
    #[error("Not synced with a room yet")]
    NotSynced,

    /// The message was empty or whitespace-only.
    #[error("Message content is empty")]
    EmptyContent,
}
