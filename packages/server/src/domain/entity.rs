//! Domain entities.

use super::value_object::MessageContent;

/// A relayed message: an immutable `(sender, content)` pair.
///
/// The protocol assigns no message id; echo suppression on the client is
/// keyed by sender identity alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// The sender's self-reported identity label.
    pub sender: String,
    /// The message body.
    pub content: MessageContent,
}

impl Message {
    pub fn new(sender: impl Into<String>, content: MessageContent) -> Self {
        Self {
            sender: sender.into(),
            content,
        }
    }
}
