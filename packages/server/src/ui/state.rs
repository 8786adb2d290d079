//! Server state shared across handlers.

use std::sync::Arc;

use crate::domain::MessagePusher;
use crate::usecase::{DisconnectUseCase, JoinRoomUseCase, ListRoomsUseCase, SendMessageUseCase};

/// Shared application state
pub struct AppState {
    /// JoinRoomUseCase（部屋参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// SendMessageUseCase（メッセージ送信のユースケース）
    pub send_message_usecase: Arc<SendMessageUseCase>,
    /// DisconnectUseCase（切断のユースケース）
    pub disconnect_usecase: Arc<DisconnectUseCase>,
    /// ListRoomsUseCase（部屋一覧取得のユースケース）
    pub list_rooms_usecase: Arc<ListRoomsUseCase>,
    /// MessagePusher（接続ごとの送信チャンネルの登録先）
    pub pusher: Arc<dyn MessagePusher>,
}
