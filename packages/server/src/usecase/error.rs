//! Usecase error types.

use thiserror::Error;

/// Errors from [`super::JoinRoomUseCase`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinRoomError {
    /// Room name failed validation. Rejected silently at the boundary.
    #[error("Invalid room name")]
    InvalidRoomName,

    /// The history replay could not be delivered to the requester.
    #[error("Failed to deliver history replay: {0}")]
    ReplyFailed(String),
}

/// Errors from [`super::SendMessageUseCase`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    /// Room name failed validation. Rejected silently at the boundary.
    #[error("Invalid room name")]
    InvalidRoomName,

    /// Content was empty after trimming. Rejected silently at the boundary.
    #[error("Empty message content")]
    EmptyContent,

    /// Fan-out to the room members failed as a whole.
    #[error("Failed to broadcast message: {0}")]
    BroadcastFailed(String),
}
