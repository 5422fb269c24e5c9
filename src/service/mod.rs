pub mod chat;
pub mod llm;
pub mod prompt;

pub use chat::ChatService;
pub use llm::{LlmClient, LlmError, OpenAiClient};
