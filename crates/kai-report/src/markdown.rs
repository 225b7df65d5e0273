//! Markdown-subset block parser
//!
//! The summary model emits a small Markdown subset: `#`/`##` headings,
//! `-`/`*` bullet lines, blank separator lines, and plain paragraphs.
//! Anything fancier is treated as a paragraph.

/// A renderable document block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Level-1 heading (`# `)
    Heading(String),
    /// Level-2 heading (`## `)
    Subheading(String),
    /// Consecutive bullet lines grouped into one list
    Bullets(Vec<String>),
    /// Plain text paragraph
    Paragraph(String),
    /// Vertical spacing from a blank line
    Spacer,
}

/// Parse summary text into document blocks
///
/// Bullet lines accumulate into a group that is flushed by the first
/// non-bullet line (heading, paragraph, or blank) and at end of input.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut bullets: Vec<String> = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();

        if line.is_empty() {
            flush_bullets(&mut blocks, &mut bullets);
            blocks.push(Block::Spacer);
        } else if let Some(rest) = line.strip_prefix("## ") {
            flush_bullets(&mut blocks, &mut bullets);
            blocks.push(Block::Subheading(rest.trim().to_string()));
        } else if let Some(rest) = line.strip_prefix("# ") {
            flush_bullets(&mut blocks, &mut bullets);
            blocks.push(Block::Heading(rest.trim().to_string()));
        } else if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            bullets.push(rest.trim().to_string());
        } else {
            flush_bullets(&mut blocks, &mut bullets);
            blocks.push(Block::Paragraph(line.to_string()));
        }
    }

    flush_bullets(&mut blocks, &mut bullets);

    blocks
}

fn flush_bullets(blocks: &mut Vec<Block>, bullets: &mut Vec<String>) {
    if !bullets.is_empty() {
        blocks.push(Block::Bullets(std::mem::take(bullets)));
    }
}
