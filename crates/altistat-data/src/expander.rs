//! Lazy expansion of raw batch rows into per-token records.

use serde_json::Value;
use tracing::debug;

use altistat_core::models::{ExpandedRecord, RawRecord};

use crate::classifier::{LineClassifier, ParseMode};
use crate::tokenizer::LineTokenizer;

/// Turns raw per-day rows into one [`ExpandedRecord`] per token.
///
/// Owns the tokenizer and classifier so their compiled patterns are reused
/// across the whole batch.
pub struct RowExpander {
    tokenizer: LineTokenizer,
    classifier: LineClassifier,
    mode: ParseMode,
}

impl RowExpander {
    pub fn new(mode: ParseMode) -> Self {
        Self {
            tokenizer: LineTokenizer::new(),
            classifier: LineClassifier::new(),
            mode,
        }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    /// Tokenize and classify one markup fragment into its token sequence.
    pub fn expand_markup(&self, markup: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(markup)
            .iter()
            .flat_map(|line| self.classifier.classify(line, self.mode))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Lazily expand `rows` into [`ExpandedRecord`]s.
    ///
    /// Row order is preserved, and within one row the tokenizer/classifier
    /// order. Rows that are not a valid `[date, weekend, holiday, markup]`
    /// array are silently skipped: cached batches accumulate heterogeneous
    /// legacy shapes over time, and a stats run must not die on them. A row
    /// whose markup yields no tokens contributes nothing.
    pub fn expand<'a>(
        &'a self,
        rows: &'a [Value],
    ) -> impl Iterator<Item = ExpandedRecord> + 'a {
        rows.iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let record = RawRecord::from_value(value);
                if record.is_none() {
                    debug!("Skipping malformed batch row at index {}", index);
                }
                record
            })
            .flat_map(move |record| {
                let tokens = self.expand_markup(&record.markup);
                tokens.into_iter().map(move |token| ExpandedRecord {
                    date: record.date,
                    token,
                    is_weekend: record.is_weekend,
                    is_holiday: record.is_holiday,
                    markup: record.markup.clone(),
                })
            })
    }
}
