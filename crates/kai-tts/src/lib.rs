//! Speech synthesis for the Kai backend
//!
//! Providers implement a common trait; the `Synthesizer` front is built
//! once from configuration with the voice every request uses.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod synthesizer;
mod types;

pub use error::{Result, TtsError};
pub use synthesizer::Synthesizer;
pub use types::{SpeechAudio, SpeechRequest};
