//! Display-only cache of rooms visited in this session.
//!
//! When the user navigates back to a room, the cached view is shown
//! immediately while the authoritative history replay is in flight. The
//! cache never feeds back into the sync state.

use std::collections::HashMap;

use tamariba_shared::protocol::MessageDto;

/// Last known view of each room visited in this session.
#[derive(Debug, Default)]
pub struct RoomCache {
    rooms: HashMap<String, Vec<MessageDto>>,
}

impl RoomCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the view of `room`, replacing any older snapshot.
    pub fn store(&mut self, room: &str, messages: &[MessageDto]) {
        self.rooms.insert(room.to_string(), messages.to_vec());
    }

    pub fn get(&self, room: &str) -> Option<&[MessageDto]> {
        self.rooms.get(room).map(Vec::as_slice)
    }

    /// Names of all cached rooms, sorted for stable display.
    pub fn room_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rooms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
