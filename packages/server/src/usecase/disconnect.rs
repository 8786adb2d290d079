//! UseCase: 切断処理
//!
//! トランスポートの切断時の後片付け。どの部屋にも通知は流しません
//! （"user left" のブロードキャストは行わない設計）。既に配送済みの
//! ブロードキャストはキャンセルされません。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, MessagePusher};

/// 切断のユースケース
pub struct DisconnectUseCase {
    /// ConnectionRegistry（メンバーシップの抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    pusher: Arc<dyn MessagePusher>,
}

impl DisconnectUseCase {
    /// 新しい DisconnectUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<dyn MessagePusher>) -> Self {
        Self { registry, pusher }
    }

    /// 切断を実行
    ///
    /// 接続を所属する部屋から退出させ、送信チャンネルを登録解除します。
    /// 未参加・未登録の接続に対しては何もしません（冪等）。
    pub async fn execute(&self, conn: ConnectionId) {
        self.registry.leave(&conn).await;
        self.pusher.unregister(&conn).await;
        tracing::info!("Connection '{}' cleaned up after disconnect", conn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::RoomName,
        infrastructure::{InMemoryConnectionRegistry, WebSocketMessagePusher},
    };
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_disconnect_removes_membership_and_channel() {
        // テスト項目: 切断でメンバーシップと送信チャンネルの両方が消える
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let pusher = Arc::new(WebSocketMessagePusher::new());
        let usecase = DisconnectUseCase::new(registry.clone(), pusher.clone());

        let conn = ConnectionId::generate();
        let lobby = RoomName::new("lobby").unwrap();
        let (tx, _rx) = mpsc::unbounded_channel();
        pusher.register(conn.clone(), tx).await;
        registry.join(conn.clone(), lobby.clone()).await;

        // when (操作):
        usecase.execute(conn.clone()).await;

        // then (期待する結果):
        assert!(registry.members_of(&lobby).await.is_empty());
        assert!(pusher.push_to(&conn, "late").await.is_err());
    }

    #[tokio::test]
    async fn test_disconnect_of_unknown_connection_is_noop() {
        // テスト項目: 未参加の接続の切断が何も起こさない（冪等）
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let pusher = Arc::new(WebSocketMessagePusher::new());
        let usecase = DisconnectUseCase::new(registry.clone(), pusher);

        // when (操作):
        usecase.execute(ConnectionId::generate()).await;

        // then (期待する結果): パニックやエラーなく完了する
    }

    #[tokio::test]
    async fn test_disconnect_leaves_other_members_untouched() {
        // テスト項目: 一方の切断が他のメンバーのメンバーシップに影響しない
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let pusher = Arc::new(WebSocketMessagePusher::new());
        let usecase = DisconnectUseCase::new(registry.clone(), pusher.clone());

        let leaving = ConnectionId::generate();
        let staying = ConnectionId::generate();
        let lobby = RoomName::new("lobby").unwrap();
        registry.join(leaving.clone(), lobby.clone()).await;
        registry.join(staying.clone(), lobby.clone()).await;

        // when (操作):
        usecase.execute(leaving).await;

        // then (期待する結果):
        assert_eq!(registry.members_of(&lobby).await, vec![staying]);
    }
}
