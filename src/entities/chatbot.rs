use crate::error::ValidationDetails;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 사용자 질문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatQuery {
    pub message: String,
}

impl ChatQuery {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Rejects messages that carry no text once surrounding whitespace is removed.
    pub fn validate(&self) -> Result<(), ValidationDetails> {
        if self.message.trim().is_empty() {
            return Err(ValidationDetails {
                field: "message".to_string(),
                message: t!("validation.empty_message").to_string(),
            });
        }
        Ok(())
    }
}

/// 챗봇 답변
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    #[display("user")]
    User,
    #[display("bot")]
    Bot,
}

/// One transcript entry as sent by the web client: `{ "type": "user", "message": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "type")]
    pub role: Speaker,
    #[serde(rename = "message")]
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Speaker::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { role: Speaker::Bot, text: text.into() }
    }
}

/// 전체 채팅 내역 (시간순)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatHistory {
    pub messages: Vec<ChatMessage>,
}

/// 요약 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
}
