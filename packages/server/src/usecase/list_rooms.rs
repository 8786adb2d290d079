//! UseCase: 部屋一覧取得処理
//!
//! HTTP の `GET /api/rooms` で使われる読み取り専用のユースケース。
//! クライアントのサイドバー初期化のため、既知の全ての部屋名とその
//! 履歴を返します。

use std::collections::BTreeMap;
use std::sync::Arc;

use tamariba_shared::protocol::MessageDto;

use crate::domain::RoomStore;

/// 部屋一覧取得のユースケース
pub struct ListRoomsUseCase {
    /// RoomStore（履歴アクセスの抽象化）
    store: Arc<dyn RoomStore>,
}

impl ListRoomsUseCase {
    /// 新しい ListRoomsUseCase を作成
    pub fn new(store: Arc<dyn RoomStore>) -> Self {
        Self { store }
    }

    /// 部屋一覧の取得を実行
    ///
    /// # Returns
    ///
    /// 部屋名 → 履歴のマップ。join のみでメッセージの無い部屋は空の
    /// 履歴で現れます。
    pub async fn execute(&self) -> BTreeMap<String, Vec<MessageDto>> {
        let mut result = BTreeMap::new();
        for room in self.store.list_rooms().await {
            let messages: Vec<MessageDto> = self
                .store
                .history(&room)
                .await
                .iter()
                .map(MessageDto::from)
                .collect();
            result.insert(room.into_string(), messages);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Message, MessageContent, RoomName},
        infrastructure::InMemoryRoomStore,
    };

    #[tokio::test]
    async fn test_list_rooms_empty_store() {
        // テスト項目: 部屋が無い場合、空のマップが返る
        // given (前提条件):
        let store = Arc::new(InMemoryRoomStore::new());
        let usecase = ListRoomsUseCase::new(store);

        // when (操作):
        let rooms = usecase.execute().await;

        // then (期待する結果):
        assert!(rooms.is_empty());
    }

    #[tokio::test]
    async fn test_list_rooms_includes_histories() {
        // テスト項目: 各部屋の履歴が到着順のまま返る
        // given (前提条件):
        let store = Arc::new(InMemoryRoomStore::new());
        let lobby = RoomName::new("lobby").unwrap();
        store
            .append(&lobby, Message::new("X", MessageContent::new("hello").unwrap()))
            .await;
        store
            .append(&lobby, Message::new("Y", MessageContent::new("hi").unwrap()))
            .await;
        let usecase = ListRoomsUseCase::new(store);

        // when (操作):
        let rooms = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(rooms.len(), 1);
        let history = &rooms["lobby"];
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sender, "X");
        assert_eq!(history[0].content, "hello");
        assert_eq!(history[1].sender, "Y");
    }

    #[tokio::test]
    async fn test_list_rooms_includes_joined_but_empty_rooms() {
        // テスト項目: join のみの部屋が空の履歴で現れる
        // given (前提条件):
        let store = Arc::new(InMemoryRoomStore::new());
        store.ensure_room(&RoomName::new("cave").unwrap()).await;
        let usecase = ListRoomsUseCase::new(store);

        // when (操作):
        let rooms = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(rooms.len(), 1);
        assert!(rooms["cave"].is_empty());
    }
}
