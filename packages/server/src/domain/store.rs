//! RoomStore trait 定義
//!
//! 部屋ごとのメッセージ履歴へのアクセスを抽象化します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{Message, RoomName};

/// Per-room message history, ordered by arrival at the relay.
///
/// History lives for the process lifetime. Rooms are created lazily on
/// first join or first message and are never destroyed. Appends for a
/// given room are serialized by the implementation so a room's history
/// has a single total order.
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// 部屋を作成する（既に存在する場合は何もしない）
    ///
    /// Makes a room visible in [`RoomStore::list_rooms`] even before it
    /// has received any message.
    async fn ensure_room(&self, room: &RoomName);

    /// メッセージを部屋の履歴へ追記する（部屋が無ければ作成する）
    async fn append(&self, room: &RoomName, message: Message);

    /// 部屋の全履歴のスナップショットを取得する
    ///
    /// Returns an empty sequence for an unknown room. Later appends do
    /// not mutate a returned snapshot.
    async fn history(&self, room: &RoomName) -> Vec<Message>;

    /// 既知の全ての部屋名を取得する
    async fn list_rooms(&self) -> Vec<RoomName>;
}
