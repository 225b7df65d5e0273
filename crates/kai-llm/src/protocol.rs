//! OpenAI-compatible chat completion wire format
//!
//! Request types are strict; response types are deliberately loose, since
//! compatible routers differ in how they shape the assistant message.

use serde::{Deserialize, Serialize};

// -- Request types --

/// Chat completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
}

/// Role of a message participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction
    System,
    /// User message
    User,
    /// Assistant response
    Assistant,
}

/// Message within a completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Role of the message author
    pub role: Role,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

// -- Response types --

/// Chat completion response
///
/// Only the parts the relay reads are modeled; everything else upstream
/// sends (ids, usage, timestamps) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletion {
    /// Generated choices
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// Choice within a completion response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    /// Generated assistant message
    #[serde(default)]
    pub message: Option<AssistantMessage>,
}

/// Assistant message within a response choice
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssistantMessage {
    /// Content (string or array of segments)
    #[serde(default)]
    pub content: Option<Content>,
    /// Top-level text some routers emit instead of `content`
    #[serde(default)]
    pub text: Option<String>,
}

/// Assistant content, either plain text or structured segments
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Plain text content
    Text(String),
    /// Array of content segments
    Segments(Vec<Segment>),
}

/// Individual segment within structured assistant content
///
/// Segments appear with or without a `type` tag; the tag is irrelevant to
/// text recovery and is not modeled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Segment {
    /// Direct text payload
    #[serde(default)]
    pub text: Option<String>,
    /// Nested content string some routers emit instead of `text`
    #[serde(default)]
    pub content: Option<String>,
}
