//! Splits a scraped markup fragment into raw text lines.
//!
//! The source markup is inconsistent about line breaks: `<br/>`, `<br>` and
//! the mis-paired `</br>` all occur, sometimes with internal whitespace, and
//! literal `\r\n`/`\r` sequences show up inside text nodes. The tokenizer
//! treats all of them as the same break and emits cleaned, non-empty lines in
//! the original left-to-right order. That order is load-bearing: the
//! classifier and the expander identify "the next occurrence" relative to it.

use regex::Regex;

use altistat_core::text::strip_invisible;

/// Markup-fragment line splitter.
pub struct LineTokenizer {
    line_break: Regex,
}

impl LineTokenizer {
    pub fn new() -> Self {
        Self {
            // One pattern for every observed spelling of a break element:
            // <br/>, <br>, </br>, and whitespace-padded variants.
            line_break: Regex::new(r"(?i)<\s*/?\s*br\s*/?\s*>").expect("regex is valid"),
        }
    }

    /// Split `markup` into cleaned lines.
    ///
    /// Break elements and literal newline sequences (`\r\n`, `\r`, `\n`) all
    /// separate lines. Every line is stripped of Unicode format characters
    /// and surrounding whitespace; empty pieces are dropped. Total: empty or
    /// break-only input yields an empty vector.
    pub fn tokenize(&self, markup: &str) -> Vec<String> {
        let mut lines = Vec::new();
        for segment in self.line_break.split(markup) {
            let normalized = segment.replace("\r\n", "\n").replace('\r', "\n");
            for piece in normalized.split('\n') {
                let cleaned = strip_invisible(piece);
                let trimmed = cleaned.trim();
                if !trimmed.is_empty() {
                    lines.push(trimmed.to_string());
                }
            }
        }
        lines
    }
}

impl Default for LineTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
