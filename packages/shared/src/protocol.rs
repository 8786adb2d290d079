//! Wire protocol between relay server and clients.
//!
//! Events are JSON objects tagged by a `type` field. Field names stay
//! camelCase (`roomName`) for compatibility with the original frontend.
//!
//! | Event          | Direction      | Payload                       |
//! |----------------|----------------|-------------------------------|
//! | `join_room`    | client→server  | `{roomName}`                  |
//! | `load_messages`| server→client  | `{messages: [MessageDto]}`    |
//! | `chat_message` | client→server  | `{sender, content, roomName}` |
//! | `chat_message` | server→client  | `{sender, content}`           |
//!
//! The history replay (`load_messages`) goes only to the joining
//! connection; `chat_message` broadcasts go to every member of the target
//! room, including the sender. Suppressing the sender's own echo is the
//! client's job.

use serde::{Deserialize, Serialize};

/// A single relayed message as it appears on the wire.
///
/// No message id and no timestamp; `(sender, content)` is all the
/// protocol carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub sender: String,
    pub content: String,
}

/// Events a client sends to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Switch the connection's membership to `room_name` and request the
    /// room's history replay.
    JoinRoom {
        #[serde(rename = "roomName")]
        room_name: String,
    },
    /// Submit a message to a room.
    ChatMessage {
        sender: String,
        content: String,
        #[serde(rename = "roomName")]
        room_name: String,
    },
}

/// Events the relay sends to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Reply to `join_room`: the room's full history in arrival order.
    LoadMessages { messages: Vec<MessageDto> },
    /// A message broadcast to all current members of its room.
    ChatMessage { sender: String, content: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_room_wire_format() {
        // テスト項目: join_room イベントが期待する JSON 形式になる
        // given (前提条件):
        let event = ClientEvent::JoinRoom {
            room_name: "lobby".to_string(),
        };

        // when (操作):
        let json = serde_json::to_string(&event).unwrap();

        // then (期待する結果):
        assert_eq!(json, r#"{"type":"join_room","roomName":"lobby"}"#);
    }

    #[test]
    fn test_chat_message_from_client_carries_room_name() {
        // テスト項目: クライアント発の chat_message が roomName を含む
        // given (前提条件):
        let json = r#"{"type":"chat_message","sender":"User-a1b2c3","content":"hi","roomName":"lobby"}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ClientEvent::ChatMessage {
                sender: "User-a1b2c3".to_string(),
                content: "hi".to_string(),
                room_name: "lobby".to_string(),
            }
        );
    }

    #[test]
    fn test_broadcast_chat_message_has_no_room_name() {
        // テスト項目: サーバー発の chat_message は sender と content のみを持つ
        // given (前提条件):
        let event = ServerEvent::ChatMessage {
            sender: "User-a1b2c3".to_string(),
            content: "hi".to_string(),
        };

        // when (操作):
        let json = serde_json::to_string(&event).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            r#"{"type":"chat_message","sender":"User-a1b2c3","content":"hi"}"#
        );
    }

    #[test]
    fn test_load_messages_preserves_order() {
        // テスト項目: load_messages のメッセージ列が順序を保ったまま往復する
        // given (前提条件):
        let event = ServerEvent::LoadMessages {
            messages: vec![
                MessageDto {
                    sender: "X".to_string(),
                    content: "hello".to_string(),
                },
                MessageDto {
                    sender: "Y".to_string(),
                    content: "world".to_string(),
                },
            ],
        };

        // when (操作):
        let json = serde_json::to_string(&event).unwrap();
        let decoded: ServerEvent = serde_json::from_str(&json).unwrap();

        // then (期待する結果):
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_unknown_event_type_is_rejected() {
        // テスト項目: 未知の type を持つイベントはデシリアライズに失敗する
        // given (前提条件):
        let json = r#"{"type":"leave_room","roomName":"lobby"}"#;

        // when (操作):
        let result: Result<ClientEvent, _> = serde_json::from_str(json);

        // then (期待する結果):
        assert!(result.is_err());
    }
}
