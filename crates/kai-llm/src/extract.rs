//! Best-effort extraction of the assistant reply text
//!
//! Compatible routers disagree on where reply text lives in the response
//! body. Instead of nested conditionals, the fallback policy is an ordered
//! list of strategies tried until one recovers non-empty text, so the
//! policy stays auditable and each strategy is testable on its own.

use crate::protocol::{AssistantMessage, ChatCompletion, Content};

type Strategy = fn(&AssistantMessage) -> Option<String>;

/// Extraction strategies, in priority order
const STRATEGIES: &[Strategy] = &[content_text, segment_texts, message_text];

/// Extract the assistant's reply text from a completion response
///
/// Returns an empty string when nothing usable is found; callers apply
/// their own fallback text.
pub fn assistant_text(completion: &ChatCompletion) -> String {
    let Some(message) = completion.choices.first().and_then(|choice| choice.message.as_ref()) else {
        return String::new();
    };

    for strategy in STRATEGIES {
        if let Some(text) = strategy(message)
            && !text.trim().is_empty()
        {
            return text;
        }
    }

    String::new()
}

/// Message content as a plain string
fn content_text(message: &AssistantMessage) -> Option<String> {
    match &message.content {
        Some(Content::Text(text)) => Some(text.clone()),
        _ => None,
    }
}

/// Message content as a segment list, joined with newlines
///
/// Segments with no recoverable text are skipped.
fn segment_texts(message: &AssistantMessage) -> Option<String> {
    let Some(Content::Segments(segments)) = &message.content else {
        return None;
    };

    let texts: Vec<&str> = segments
        .iter()
        .filter_map(|segment| segment.text.as_deref().or(segment.content.as_deref()))
        .collect();

    if texts.is_empty() { None } else { Some(texts.join("\n")) }
}

/// Top-level `text` field on the message
fn message_text(message: &AssistantMessage) -> Option<String> {
    message.text.clone()
}
