//! Usecase layer: one struct per relay event, each a thin orchestration
//! over the domain ports.

mod disconnect;
mod error;
mod join_room;
mod list_rooms;
mod send_message;

pub use disconnect::DisconnectUseCase;
pub use error::{JoinRoomError, SendMessageError};
pub use join_room::JoinRoomUseCase;
pub use list_rooms::ListRoomsUseCase;
pub use send_message::SendMessageUseCase;
