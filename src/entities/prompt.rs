use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    #[display("system")]
    System,
    #[display("user")]
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

/// Final message list handed to the LLM provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPrompt {
    pub messages: Vec<PromptMessage>,
}

impl RenderedPrompt {
    pub fn system_and_user(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![
                PromptMessage { role: PromptRole::System, content: system.into() },
                PromptMessage { role: PromptRole::User, content: user.into() },
            ],
        }
    }

    pub fn user_content(&self) -> Option<&str> {
        self.messages.iter().find(|m| m.role == PromptRole::User).map(|m| m.content.as_str())
    }
}
