//! Conversion logic between wire DTOs and domain entities.

use tamariba_shared::protocol::MessageDto;

use crate::domain::{Message, MessageContent, ValidationError};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            sender: message.sender,
            content: message.content.into_string(),
        }
    }
}

impl From<&Message> for MessageDto {
    fn from(message: &Message) -> Self {
        Self {
            sender: message.sender.clone(),
            content: message.content.as_str().to_string(),
        }
    }
}

// ========================================
// DTO → Domain Entity
// ========================================

impl TryFrom<MessageDto> for Message {
    type Error = ValidationError;

    fn try_from(dto: MessageDto) -> Result<Self, Self::Error> {
        Ok(Self {
            sender: dto.sender,
            content: MessageContent::new(dto.content)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_message_to_dto() {
        // テスト項目: ドメインの Message が DTO に変換される
        // given (前提条件):
        let message = Message::new("alice", MessageContent::new("Hello!").unwrap());

        // when (操作):
        let dto: MessageDto = message.into();

        // then (期待する結果):
        assert_eq!(dto.sender, "alice");
        assert_eq!(dto.content, "Hello!");
    }

    #[test]
    fn test_dto_to_domain_message() {
        // テスト項目: DTO の Message がドメインエンティティに変換される
        // given (前提条件):
        let dto = MessageDto {
            sender: "bob".to_string(),
            content: "Hi!".to_string(),
        };

        // when (操作):
        let message: Message = dto.try_into().unwrap();

        // then (期待する結果):
        assert_eq!(message.sender, "bob");
        assert_eq!(message.content.as_str(), "Hi!");
    }

    #[test]
    fn test_dto_with_blank_content_is_rejected() {
        // テスト項目: 空白のみの本文を持つ DTO は変換に失敗する
        // given (前提条件):
        let dto = MessageDto {
            sender: "bob".to_string(),
            content: "   ".to_string(),
        };

        // when (操作):
        let result: Result<Message, _> = dto.try_into();

        // then (期待する結果):
        assert_eq!(result, Err(ValidationError::EmptyContent));
    }
}
