//! InMemory RoomStore 実装
//!
//! ドメイン層が定義する RoomStore trait の具体的な実装。
//! BTreeMap をインメモリ DB として使用します。
//!
//! 全ての部屋の変更を一つのロックで直列化します。append はロックを
//! 保持したままの短い操作のみで、I/O を跨いでロックを持ちません。
//! 履歴はスナップショット（clone）として返します。

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Message, RoomName, RoomStore};

/// インメモリ RoomStore 実装
///
/// 部屋名 → メッセージ履歴のマップを保持します。部屋は最初の join
/// または最初のメッセージで遅延生成され、プロセス終了まで残ります。
pub struct InMemoryRoomStore {
    /// Room name → ordered message history (BTreeMap for deterministic
    /// room listing)
    rooms: Mutex<BTreeMap<RoomName, Vec<Message>>>,
}

impl InMemoryRoomStore {
    /// 新しい InMemoryRoomStore を作成
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryRoomStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn ensure_room(&self, room: &RoomName) {
        let mut rooms = self.rooms.lock().await;
        rooms.entry(room.clone()).or_default();
    }

    async fn append(&self, room: &RoomName, message: Message) {
        let mut rooms = self.rooms.lock().await;
        rooms.entry(room.clone()).or_default().push(message);
    }

    async fn history(&self, room: &RoomName) -> Vec<Message> {
        let rooms = self.rooms.lock().await;
        rooms.get(room).cloned().unwrap_or_default()
    }

    async fn list_rooms(&self) -> Vec<RoomName> {
        let rooms = self.rooms.lock().await;
        rooms.keys().cloned().collect()
    }
}
