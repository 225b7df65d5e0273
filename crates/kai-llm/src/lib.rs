//! Chat-completion client for the Kai backend
//!
//! Speaks the OpenAI-compatible chat completions wire format and provides
//! the resilient reply-text extraction the endpoints share.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
pub mod extract;
pub mod protocol;

pub use client::ChatClient;
pub use error::ChatError;
pub use protocol::{ChatCompletion, ChatMessage, Role};
