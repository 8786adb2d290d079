//! MessagePusher trait 定義
//!
//! クライアントへのメッセージ送信（push）を抽象化します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use super::ConnectionId;

/// Channel handle through which a connection's outbound messages flow.
///
/// The WebSocket write half is driven elsewhere; pushing through this
/// handle never blocks, so callers may hold short-lived locks around it.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Errors raised when pushing a message to a connection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PushError {
    /// The connection is not registered (already disconnected).
    #[error("Connection '{0}' not found")]
    ConnectionNotFound(String),

    /// The connection's channel rejected the message.
    #[error("Failed to push message: {0}")]
    PushFailed(String),
}

/// Outbound delivery port for the relay.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続を登録する
    async fn register(&self, conn: ConnectionId, sender: PusherChannel);

    /// 接続を登録解除する
    async fn unregister(&self, conn: &ConnectionId);

    /// 特定の接続にメッセージを送信する
    async fn push_to(&self, conn: &ConnectionId, content: &str) -> Result<(), PushError>;

    /// 複数の接続にメッセージを送信する
    ///
    /// Partial failures are tolerated and logged; a dropped member must
    /// not prevent delivery to the rest.
    async fn broadcast(&self, targets: Vec<ConnectionId>, content: &str)
    -> Result<(), PushError>;
}
