pub mod chatbot;
pub mod prompt;

pub use chatbot::{ChatHistory, ChatMessage, ChatQuery, ChatReply, Speaker, SummaryResult};
pub use prompt::{PromptMessage, PromptRole, RenderedPrompt};
