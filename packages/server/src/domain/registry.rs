//! ConnectionRegistry trait 定義
//!
//! 接続と部屋のメンバーシップの対応を抽象化します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ConnectionId, RoomName};

/// Bidirectional map between live connections and their current room.
///
/// A connection is a member of at most one room at a time: joining room B
/// implicitly leaves room A. Implementations keep both directions
/// consistent under concurrent access.
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// 接続を部屋に参加させる（以前の部屋からは自動的に退出する）
    ///
    /// Idempotent if the connection is already a member of `room`.
    async fn join(&self, conn: ConnectionId, room: RoomName);

    /// 接続をその所属する部屋から退出させる（未参加なら何もしない）
    async fn leave(&self, conn: &ConnectionId);

    /// 部屋の現在のメンバーのスナップショットを取得する
    async fn members_of(&self, room: &RoomName) -> Vec<ConnectionId>;

    /// 接続が現在参加している部屋を取得する
    async fn current_room(&self, conn: &ConnectionId) -> Option<RoomName>;
}
