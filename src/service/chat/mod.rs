pub mod transcript;

use crate::entities::{ChatHistory, ChatQuery, ChatReply, RenderedPrompt, SummaryResult};
use crate::service::llm::LlmClient;
use crate::service::prompt::{render_chat_prompt, render_summary_prompt};
use std::sync::Arc;

pub use transcript::format_transcript;

/// Answers chat questions and summarizes transcripts through one shared LLM client.
///
/// Neither operation fails: provider errors and empty completions are replaced
/// by a localized fallback text.
pub struct ChatService {
    llm: Arc<dyn LlmClient>,
    locale: String,
}

impl ChatService {
    pub fn new(llm: Arc<dyn LlmClient>, locale: impl Into<String>) -> Self {
        Self { llm, locale: locale.into() }
    }

    pub async fn get_reply(&self, query: &ChatQuery) -> ChatReply {
        let prompt = render_chat_prompt(&query.message);
        let reply = match self.generate(&prompt).await {
            Some(text) => text,
            None => t!("fallback.reply", locale = self.locale.as_str()).to_string(),
        };
        ChatReply { reply }
    }

    pub async fn summarize(&self, history: &ChatHistory) -> SummaryResult {
        let transcript = format_transcript(&history.messages);
        log::debug!(
            "Summarizing {} messages ({} characters)",
            history.messages.len(),
            transcript.chars().count()
        );

        let prompt = render_summary_prompt(&transcript);
        let summary = match self.generate(&prompt).await {
            Some(text) => text,
            None => t!("fallback.summary", locale = self.locale.as_str()).to_string(),
        };
        SummaryResult { summary }
    }

    async fn generate(&self, prompt: &RenderedPrompt) -> Option<String> {
        match self.llm.complete(prompt).await {
            Ok(text) if text.trim().is_empty() => {
                log::warn!("LLM provider returned an empty completion");
                None
            }
            Ok(text) => Some(text),
            Err(e) => {
                log::error!("Error during LLM invocation: {}", e);
                None
            }
        }
    }
}
