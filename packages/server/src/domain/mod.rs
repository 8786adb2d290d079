//! Domain model of the relay: entities, value objects, and the ports
//! (traits) that the usecase layer depends on.
//!
//! The traits are defined here and implemented by the infrastructure
//! layer (dependency inversion), so usecases never touch a concrete
//! store, registry, or transport.

mod entity;
mod error;
mod pusher;
mod registry;
mod sequencer;
mod store;
mod value_object;

pub use entity::Message;
pub use error::ValidationError;
pub use pusher::{MessagePusher, PushError, PusherChannel};
pub use registry::ConnectionRegistry;
pub use sequencer::RoomSequencer;
pub use store::RoomStore;
pub use value_object::{ConnectionId, MessageContent, RoomName};

#[cfg(test)]
pub use pusher::MockMessagePusher;
