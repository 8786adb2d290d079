//! UseCase: 部屋への参加処理
//!
//! join_room イベントの処理。接続のメンバーシップを切り替え、その部屋の
//! 履歴リプレイ（load_messages）を要求元の接続だけに返します。履歴は
//! ブロードキャストされません。

use std::sync::Arc;

use tamariba_shared::protocol::{MessageDto, ServerEvent};

use crate::domain::{
    ConnectionId, ConnectionRegistry, MessagePusher, RoomName, RoomSequencer, RoomStore,
};

use super::error::JoinRoomError;

/// 部屋参加のユースケース
pub struct JoinRoomUseCase {
    /// RoomStore（履歴アクセスの抽象化）
    store: Arc<dyn RoomStore>,
    /// ConnectionRegistry（メンバーシップの抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    pusher: Arc<dyn MessagePusher>,
    /// RoomSequencer（参加と履歴リプレイの直列化ドメイン）
    sequencer: Arc<RoomSequencer>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
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

    /// 部屋への参加を実行
    ///
    /// # Arguments
    ///
    /// * `conn` - 参加する接続の ID
    /// * `room_name` - 参加先の部屋名（未検証の生文字列）
    ///
    /// # Returns
    ///
    /// * `Ok(RoomName)` - 参加成功（検証済みの部屋名を返す）
    /// * `Err(JoinRoomError)` - 部屋名が不正、または履歴の返信に失敗
    pub async fn execute(
        &self,
        conn: ConnectionId,
        room_name: String,
    ) -> Result<RoomName, JoinRoomError> {
        // 1. 部屋名を検証
        let room = RoomName::new(room_name).map_err(|_| JoinRoomError::InvalidRoomName)?;

        // 2〜4 は一つのクリティカルセクション。並行する送信の追記〜
        // ブロードキャストと交錯すると、同じメッセージが履歴リプレイと
        // 後続のブロードキャストの両方で届いてしまう。
        let _guard = self.sequencer.acquire().await;

        // 2. メンバーシップを切り替える（以前の部屋からは自動退出）
        self.registry.join(conn.clone(), room.clone()).await;

        // 3. 部屋を既知にする（join のみの部屋も一覧に現れる）
        self.store.ensure_room(&room).await;

        // 4. 履歴リプレイを要求元の接続だけに返す
        let history = self.store.history(&room).await;
        let messages: Vec<MessageDto> = history.iter().map(MessageDto::from).collect();
        let reply = ServerEvent::LoadMessages { messages };
        let reply_json =
            serde_json::to_string(&reply).map_err(|e| JoinRoomError::ReplyFailed(e.to_string()))?;

        self.pusher
            .push_to(&conn, &reply_json)
            .await
            .map_err(|e| JoinRoomError::ReplyFailed(e.to_string()))?;

        Ok(room)
    }
}
