//! Message formatting utilities for client display.
//!
//! Messages carry no timestamps on the wire; where a time is shown it is
//! the local arrival time, passed in by the caller to keep these
//! functions pure.

use tamariba_shared::{protocol::MessageDto, time::millis_to_local_rfc3339};

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a full room history, as shown right after a join.
    pub fn format_history(room: &str, messages: &[MessageDto]) -> String {
        let mut output = String::new();
        output.push_str("\n\n============================================================\n");
        output.push_str(&format!("Room '{}':\n", room));

        if messages.is_empty() {
            output.push_str("(no messages yet)\n");
        } else {
            for message in messages {
                output.push_str(&format!("@{}: {}\n", message.sender, message.content));
            }
        }

        output.push_str("============================================================\n");
        output
    }

    /// Format a cached view of a room, shown while the fresh history
    /// replay is still in flight.
    pub fn format_cached_history(room: &str, messages: &[MessageDto]) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n(cached view of '{}', refreshing...)\n", room));
        for message in messages {
            output.push_str(&format!("@{}: {}\n", message.sender, message.content));
        }
        output
    }

    /// Format an incoming chat message with its local arrival time.
    pub fn format_chat(message: &MessageDto, received_at: i64) -> String {
        let timestamp_str = millis_to_local_rfc3339(received_at);
        format!(
            "\n\n------------------------------------------------------------\n\
             @{}: {}\n\
             received at {}\n\
             ------------------------------------------------------------\n",
            message.sender, message.content, timestamp_str
        )
    }

    /// Format the notice printed when the user requests a room switch.
    pub fn format_room_switch(room: &str) -> String {
        format!("\nJoining room '{}'...\n", room)
    }

    /// Format a confirmation message after sending.
    pub fn format_sent_confirmation(sent_at: i64) -> String {
        let timestamp_str = millis_to_local_rfc3339(sent_at);
        format!("sent at {}\n", timestamp_str)
    }

    /// Format the list of rooms visited in this session.
    pub fn format_rooms(room_names: &[&str], current_room: Option<&str>) -> String {
        let mut output = String::new();
        output.push_str("\nRooms visited this session:\n");

        if room_names.is_empty() && current_room.is_none() {
            output.push_str("(none yet)\n");
            return output;
        }

        for name in room_names {
            let here_suffix = if Some(*name) == current_room {
                " (here)"
            } else {
                ""
            };
            output.push_str(&format!("- {}{}\n", name, here_suffix));
        }
        if let Some(current) = current_room
            && !room_names.contains(&current)
        {
            output.push_str(&format!("- {} (here)\n", current));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(sender: &str, content: &str) -> MessageDto {
        MessageDto {
            sender: sender.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_format_history_with_no_messages() {
        // テスト項目: 履歴が空の場合、適切なメッセージが表示される
        // given (前提条件):
        let messages = vec![];

        // when (操作):
        let result = MessageFormatter::format_history("lobby", &messages);

        // then (期待する結果):
        assert!(result.contains("Room 'lobby':"));
        assert!(result.contains("(no messages yet)"));
        assert!(result.contains("============================================================"));
    }

    #[test]
    fn test_format_history_lists_messages_in_order() {
        // テスト項目: 履歴のメッセージが順番に表示される
        // given (前提条件):
        let messages = vec![message("X", "hello"), message("Y", "world")];

        // when (操作):
        let result = MessageFormatter::format_history("lobby", &messages);

        // then (期待する結果):
        assert!(result.contains("@X: hello"));
        assert!(result.contains("@Y: world"));
        let x_pos = result.find("@X").unwrap();
        let y_pos = result.find("@Y").unwrap();
        assert!(x_pos < y_pos);
    }

    #[test]
    fn test_format_cached_history_is_marked_as_cached() {
        // テスト項目: キャッシュ表示にはその旨の注記が付く
        // given (前提条件):
        let messages = vec![message("X", "hello")];

        // when (操作):
        let result = MessageFormatter::format_cached_history("lobby", &messages);

        // then (期待する結果):
        assert!(result.contains("cached view of 'lobby'"));
        assert!(result.contains("@X: hello"));
    }

    #[test]
    fn test_format_chat_shows_sender_content_and_time() {
        // テスト項目: チャットメッセージが送信者・内容・受信時刻付きで表示される
        // given (前提条件):
        let msg = message("X", "Hello, world!");
        let received_at = 1672498800000;

        // when (操作):
        let result = MessageFormatter::format_chat(&msg, received_at);

        // then (期待する結果):
        assert!(result.contains("@X: Hello, world!"));
        assert!(result.contains("received at"));
        assert!(result.contains("------------------------------------------------------------"));
    }

    #[test]
    fn test_format_rooms_marks_current_room() {
        // テスト項目: 部屋一覧で現在の部屋にマークが付く
        // given (前提条件):
        let names = vec!["cave", "lobby"];

        // when (操作):
        let result = MessageFormatter::format_rooms(&names, Some("lobby"));

        // then (期待する結果):
        assert!(result.contains("- lobby (here)"));
        assert!(result.contains("- cave\n"));
        assert!(!result.contains("cave (here)"));
    }

    #[test]
    fn test_format_rooms_includes_uncached_current_room() {
        // テスト項目: キャッシュ未登録の現在の部屋も一覧に含まれる
        // given (前提条件):
        let names = vec![];

        // when (操作):
        let result = MessageFormatter::format_rooms(&names, Some("lobby"));

        // then (期待する結果):
        assert!(result.contains("- lobby (here)"));
    }

    #[test]
    fn test_format_rooms_with_nothing_visited() {
        // テスト項目: どの部屋も訪れていない場合の表示
        // given (前提条件):
        let names = vec![];

        // when (操作):
        let result = MessageFormatter::format_rooms(&names, None);

        // then (期待する結果):
        assert!(result.contains("(none yet)"));
    }
}
