//! InMemory ConnectionRegistry 実装
//!
//! 接続 → 部屋と部屋 → メンバー集合の双方向マップを一つのロックの下で
//! 一貫して保ちます。排他的メンバーシップ（1 接続 1 部屋）の不変条件は
//! join の中で強制されます。

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, ConnectionRegistry, RoomName};

#[derive(Debug, Default)]
struct RegistryInner {
    /// Connection → its current room
    conn_rooms: HashMap<ConnectionId, RoomName>,
    /// Room → member connections
    room_members: HashMap<RoomName, HashSet<ConnectionId>>,
}

/// インメモリ ConnectionRegistry 実装
pub struct InMemoryConnectionRegistry {
    inner: Mutex<RegistryInner>,
}

impl InMemoryConnectionRegistry {
    /// 新しい InMemoryConnectionRegistry を作成
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryInner::default()),
        }
    }
}

impl Default for InMemoryConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn join(&self, conn: ConnectionId, room: RoomName) {
        let mut inner = self.inner.lock().await;

        if let Some(previous) = inner.conn_rooms.get(&conn).cloned() {
            if previous == room {
                // Already a member of this room.
                return;
            }
            // Exclusivity: leave the previous room first.
            if let Some(members) = inner.room_members.get_mut(&previous) {
                members.remove(&conn);
                if members.is_empty() {
                    inner.room_members.remove(&previous);
                }
            }
        }

        inner
            .room_members
            .entry(room.clone())
            .or_default()
            .insert(conn.clone());
        inner.conn_rooms.insert(conn, room);
    }

    async fn leave(&self, conn: &ConnectionId) {
        let mut inner = self.inner.lock().await;

        if let Some(room) = inner.conn_rooms.remove(conn)
            && let Some(members) = inner.room_members.get_mut(&room)
        {
            members.remove(conn);
            if members.is_empty() {
                inner.room_members.remove(&room);
            }
        }
    }

    async fn members_of(&self, room: &RoomName) -> Vec<ConnectionId> {
        let inner = self.inner.lock().await;
        inner
            .room_members
            .get(room)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default()
    }

    async fn current_room(&self, conn: &ConnectionId) -> Option<RoomName> {
        let inner = self.inner.lock().await;
        inner.conn_rooms.get(conn).cloned()
    }
}
