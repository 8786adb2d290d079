//! UseCase: メッセージ送信処理
//!
//! chat_message イベントの処理。履歴へ追記し、対象の部屋の全メンバーへ
//! ブロードキャストします。送信者自身もブロードキャストの対象に含まれ
//! ます（エコー抑制はクライアント側の責務）。

use std::sync::Arc;

use tamariba_shared::protocol::ServerEvent;

use crate::domain::{
    ConnectionId, ConnectionRegistry, Message, MessageContent, MessagePusher, RoomName,
    RoomSequencer, RoomStore,
};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// RoomStore（履歴アクセスの抽象化）
    store: Arc<dyn RoomStore>,
    /// ConnectionRegistry（メンバーシップの抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    pusher: Arc<dyn MessagePusher>,
    /// RoomSequencer（追記とファンアウトの直列化ドメイン）
    sequencer: Arc<RoomSequencer>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(
        store: Arc<dyn RoomStore>,
        registry: Arc<dyn ConnectionRegistry>,
        pusher: Arc<dyn MessagePusher>,
        sequencer: Arc<RoomSequencer>,
    ) -> Self {
        Self {
            store,
            registry,
            pusher,
            sequencer,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `sender` - 送信者の自己申告の識別ラベル
    /// * `content` - メッセージ本文（未検証の生文字列）
    /// * `room_name` - 宛先の部屋名（未検証の生文字列）
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ConnectionId>)` - ブロードキャスト対象（送信者の接続を含む）
    /// * `Err(SendMessageError)` - 検証またはブロードキャストの失敗
    pub async fn execute(
        &self,
        sender: String,
        content: String,
        room_name: String,
    ) -> Result<Vec<ConnectionId>, SendMessageError> {
        // 1. 検証（失敗時は履歴追記もブロードキャストも行わない）
        let room = RoomName::new(room_name).map_err(|_| SendMessageError::InvalidRoomName)?;
        let content = MessageContent::new(content).map_err(|_| SendMessageError::EmptyContent)?;

        // 2〜4 は一つのクリティカルセクション。追記の順序とブロード
        // キャストの順序が一致しなければならない（配信はチャンネル
        // への非ブロッキング送信なので、ガードがソケット I/O を跨ぐ
        // ことはない）。
        let _guard = self.sequencer.acquire().await;

        // 2. 履歴へ追記（部屋が無ければ作成される）
        let message = Message::new(sender, content);
        self.store.append(&room, message.clone()).await;

        // 3. メンバーのスナップショットを取得
        let members = self.registry.members_of(&room).await;

        // 4. ブロードキャスト
        let broadcast = ServerEvent::ChatMessage {
            sender: message.sender,
            content: message.content.into_string(),
        };
        let broadcast_json = serde_json::to_string(&broadcast)
            .map_err(|e| SendMessageError::BroadcastFailed(e.to_string()))?;

        self.pusher
            .broadcast(members.clone(), &broadcast_json)
            .await
            .map_err(|e| SendMessageError::BroadcastFailed(e.to_string()))?;

        Ok(members)
    }
}
