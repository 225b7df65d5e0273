//! Summary document rendering
//!
//! Turns the Markdown-like text the model produces into a paginated PDF.
//! Parsing into blocks and drawing them are separate steps so the block
//! structure can be tested without decoding PDF output.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
pub mod markdown;
mod pdf;

pub use error::ReportError;
pub use markdown::{Block, parse_blocks};
pub use pdf::render_pdf;
