//! PDF drawing for parsed summary blocks
//!
//! Uses the built-in Helvetica faces so no font assets ship with the
//! service. Layout is a single downward cursor over A4 pages; line widths
//! are approximated by character count, which is close enough for
//! proportional body text.

use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::error::ReportError;
use crate::markdown::Block;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LAYER_NAME: &str = "content";

/// Per-block text metrics
struct TextStyle {
    size: f32,
    line_height: f32,
    max_chars: usize,
    indent: f32,
}

const HEADING: TextStyle = TextStyle {
    size: 16.0,
    line_height: 9.0,
    max_chars: 60,
    indent: 0.0,
};

const SUBHEADING: TextStyle = TextStyle {
    size: 13.0,
    line_height: 7.5,
    max_chars: 75,
    indent: 0.0,
};

const BODY: TextStyle = TextStyle {
    size: 11.0,
    line_height: 6.0,
    max_chars: 90,
    indent: 0.0,
};

const BULLET: TextStyle = TextStyle {
    size: 11.0,
    line_height: 6.0,
    max_chars: 84,
    indent: 5.0,
};

/// Render parsed blocks into a paginated A4 PDF
pub fn render_pdf(title: &str, blocks: &[Block]) -> Result<Vec<u8>, ReportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    {
        let mut cursor = Cursor {
            doc: &doc,
            layer: doc.get_page(first_page).get_layer(first_layer),
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        };

        for block in blocks {
            match block {
                Block::Heading(text) => {
                    cursor.space(4.0);
                    cursor.text(text, &HEADING, &bold);
                    cursor.space(1.5);
                }
                Block::Subheading(text) => {
                    cursor.space(3.0);
                    cursor.text(text, &SUBHEADING, &bold);
                    cursor.space(1.0);
                }
                Block::Bullets(items) => {
                    for item in items {
                        cursor.bullet_item(item, &regular);
                    }
                    cursor.space(1.0);
                }
                Block::Paragraph(text) => {
                    cursor.text(text, &BODY, &regular);
                    cursor.space(1.0);
                }
                Block::Spacer => cursor.space(4.0),
            }
        }
    }

    let mut bytes = Vec::new();
    doc.save(&mut BufWriter::new(&mut bytes))?;
    Ok(bytes)
}

/// Downward drawing cursor with page-break handling
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl Cursor<'_> {
    /// Start a fresh page when the next line would cross the bottom margin
    fn ensure_room(&mut self, needed: f32) {
        if self.y - needed < MARGIN_MM {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }

    /// Draw wrapped text at the style's indent
    fn text(&mut self, text: &str, style: &TextStyle, font: &IndirectFontRef) {
        for line in wrap(text, style.max_chars) {
            self.line(&line, style, style.indent, font);
        }
    }

    /// Draw one bullet item: marker on the first line, hanging indent after
    fn bullet_item(&mut self, item: &str, font: &IndirectFontRef) {
        for (i, line) in wrap(item, BULLET.max_chars).into_iter().enumerate() {
            if i == 0 {
                self.line(&format!("- {line}"), &BULLET, BULLET.indent, font);
            } else {
                self.line(&line, &BULLET, BULLET.indent + 4.0, font);
            }
        }
    }

    fn line(&mut self, line: &str, style: &TextStyle, indent: f32, font: &IndirectFontRef) {
        self.ensure_room(style.line_height);
        self.y -= style.line_height;
        self.layer
            .use_text(line, style.size, Mm(MARGIN_MM + indent), Mm(self.y), font);
    }

    /// Vertical gap; may run past the margin, the next line breaks the page
    fn space(&mut self, amount: f32) {
        self.y -= amount;
    }
}

/// Greedy word wrap by character count
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("short text", 40), vec!["short text"]);
    }

    #[test]
    fn wrap_breaks_at_word_boundaries() {
        let lines = wrap("alpha beta gamma delta", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn wrap_of_blank_text_yields_no_lines() {
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn render_produces_a_pdf() {
        let blocks = crate::markdown::parse_blocks("# Session Summary\n\n## Key Goals\n- stay curious\n- keep breathing");
        let bytes = render_pdf("Session Summary", &blocks).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_documents_paginate() {
        let many = (0..400).map(|i| format!("Paragraph number {i}.")).collect::<Vec<_>>().join("\n");
        let blocks = crate::markdown::parse_blocks(&many);
        let bytes = render_pdf("Session Summary", &blocks).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
