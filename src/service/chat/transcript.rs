use crate::entities::ChatMessage;

/// Renders messages as `"<role>: <text>"` lines joined by `\n`, in input order.
pub fn format_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|msg| format!("{}: {}", msg.role, msg.text))
        .collect::<Vec<_>>()
        .join("\n")
}
