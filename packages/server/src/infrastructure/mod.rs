//! Infrastructure layer: concrete implementations of the domain ports
//! plus wire DTO conversions.

pub mod dto;
pub mod pusher;
pub mod registry;
pub mod store;

pub use pusher::WebSocketMessagePusher;
pub use registry::InMemoryConnectionRegistry;
pub use store::InMemoryRoomStore;
