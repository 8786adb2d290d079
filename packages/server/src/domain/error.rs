//! Validation errors raised by value object constructors.

use thiserror::Error;

/// Rejections at the relay boundary.
///
/// These are handled silently: no broadcast, no history mutation, no
/// error surfaced to other clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Room name is empty or whitespace-only.
    #[error("Room name must not be empty")]
    EmptyRoomName,

    /// Message content is empty after trimming whitespace.
    #[error("Message content must not be empty")]
    EmptyContent,
}
