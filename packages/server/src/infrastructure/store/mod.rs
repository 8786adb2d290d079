//! RoomStore 実装
//!
//! - `inmemory`: HashMap ベースのインメモリ実装
//! - 将来的に: `redis`, `postgres` など

pub mod inmemory;

pub use inmemory::InMemoryRoomStore;
