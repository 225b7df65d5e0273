//! Prompt assembly and history normalization
//!
//! The browser client sends whatever rows its transcript view holds,
//! including UI-only system rows and aliases for the assistant role.
//! Normalization maps those onto the wire roles and drops anything the
//! upstream API would reject.

use kai_llm::{ChatMessage, Role};
use serde::Deserialize;

/// System instruction for the conversation endpoint
pub const COACH_SYSTEM_PROMPT: &str = "You are Kai, a helpful AI NLP coach. Your goal is to be a mindful \
     mirror, guiding users to their own solutions through curious, non-judgmental questions. Keep your \
     responses concise.";

/// System instruction for the summary endpoints
pub const SUMMARY_SYSTEM_PROMPT: &str = "You are reviewing a coaching conversation. Write a structured \
     Markdown summary titled '# Session Summary' with the sections '## Key Goals', '## Major Breakthroughs', \
     and '## Actionable Next Steps'. Use short bullet points under each section.";

/// Reply substituted when no text can be extracted from the model response
pub const FALLBACK_REPLY: &str = "I'm sorry, I don't have a response for that right now. Could you try \
     rephrasing?";

/// Summary substituted when no text can be extracted from the model response
pub const FALLBACK_SUMMARY: &str = "# Session Summary\n\nNo summary could be generated for this conversation.";

/// Most recent history turns forwarded on the conversation endpoint
pub const HISTORY_WINDOW: usize = 8;

/// One transcript row as the client sends it
///
/// Both fields tolerate absence so a malformed row drops out during
/// normalization instead of failing the whole request.
#[derive(Debug, Clone, Deserialize)]
pub struct Turn {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub text: String,
}

/// Build the message list for a conversation completion
///
/// Persona instruction, then the last [`HISTORY_WINDOW`] normalized turns,
/// then the new utterance.
pub fn conversation_messages(text: &str, history: &[Turn]) -> Vec<ChatMessage> {
    let normalized = normalized_turns(history);
    let start = normalized.len().saturating_sub(HISTORY_WINDOW);

    let mut messages = vec![ChatMessage::new(Role::System, COACH_SYSTEM_PROMPT)];
    messages.extend(normalized.into_iter().skip(start));
    messages.push(ChatMessage::new(Role::User, text));
    messages
}

/// Build the message list for a summary completion
///
/// The whole normalized transcript, untruncated.
pub fn summary_messages(history: &[Turn]) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::new(Role::System, SUMMARY_SYSTEM_PROMPT)];
    messages.extend(normalized_turns(history));
    messages
}

/// Normalize transcript rows into wire messages
///
/// Assistant aliases map to `assistant`; only user and assistant rows
/// survive; text is trimmed and blank rows are dropped.
fn normalized_turns(history: &[Turn]) -> Vec<ChatMessage> {
    history
        .iter()
        .filter_map(|turn| {
            let role = normalize_role(&turn.role)?;
            let text = turn.text.trim();
            if text.is_empty() {
                return None;
            }
            Some(ChatMessage::new(role, text))
        })
        .collect()
}

fn normalize_role(role: &str) -> Option<Role> {
    match role {
        "user" => Some(Role::User),
        "assistant" | "model" | "bot" | "ai" => Some(Role::Assistant),
        _ => None,
    }
}
