//! LLM 제공자 어댑터
//!
//! The rest of the service only sees [`LlmClient::complete`]; every provider-side
//! failure surfaces as an [`LlmError`] without further interpretation.

pub mod openai;

use crate::entities::RenderedPrompt;
use async_trait::async_trait;
use thiserror::Error;

pub use openai::OpenAiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Request to LLM provider failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("LLM provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &RenderedPrompt) -> Result<String, LlmError>;
}
