//! Per-line heuristics converting a raw line into one or more tokens.
//!
//! A line either contains a shift time-range (`H:MM - H:MM`) or it does not.
//! Time-range lines are split into leading labels plus one token per shift
//! range; everything else is a dash-pair candidate, where a label and a
//! trailing numeric code separated by ` - ` become two tokens. Every
//! heuristic is a total function: scraped text is inherently unvalidated, so
//! a degenerate input degrades to a single pass-through token instead of an
//! error.

use regex::Regex;

/// Selects how markup lines are turned into tokens for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Label / shift / dash-pair classification per line.
    #[default]
    Full,
    /// Each tokenizer line passes through unchanged as a single token.
    Simple,
}

/// Line classifier with its compiled patterns.
pub struct LineClassifier {
    time_range: Regex,
    time_line_start: Regex,
    dash_separator: Regex,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            time_range: Regex::new(r"\b\d{1,2}:\d{2}\s*-\s*\d{1,2}:\d{2}\b")
                .expect("regex is valid"),
            time_line_start: Regex::new(r"^\s*\d{1,2}:\d{2}\s*-\s*\d{1,2}:\d{2}\b")
                .expect("regex is valid"),
            // A dash is a separator only when whitespace surrounds it;
            // hyphens inside identifiers like "O-an" never match.
            dash_separator: Regex::new(r"\s-\s+").expect("regex is valid"),
        }
    }

    /// Classify one tokenizer line into tokens, honouring `mode`.
    pub fn classify(&self, line: &str, mode: ParseMode) -> Vec<String> {
        match mode {
            ParseMode::Simple => vec![line.to_string()],
            ParseMode::Full => self.classify_full(line),
        }
    }

    /// Returns `true` when `text` starts with a shift time-range.
    pub fn is_time_line(&self, text: &str) -> bool {
        self.time_line_start.is_match(text)
    }

    fn classify_full(&self, line: &str) -> Vec<String> {
        match self.time_range.find(line) {
            Some(m) => {
                let prefix = line[..m.start()].trim();
                let rest = line[m.start()..].trim();
                let mut out = Vec::new();
                if !prefix.is_empty() {
                    out.extend(self.split_labels(prefix));
                }
                out.extend(self.split_shifts(rest));
                out
            }
            None => self.split_dash_pair(line),
        }
    }

    /// Split the text before the first time-range into label tokens.
    ///
    /// Greedy, left-to-right, no backtracking:
    /// * tokens containing a hyphen (two-part codes like `O-an`, `BTY-sen`)
    ///   are never split further;
    /// * an all-uppercase token of length ≥ 2 is merged with the following
    ///   token into one two-word label (`"VITA dagtid"`), but only when that
    ///   token is not itself uppercase and carries no digit, no hyphen and no
    ///   time-range;
    /// * everything else passes through unchanged.
    pub fn split_labels(&self, prefix: &str) -> Vec<String> {
        let tokens: Vec<&str> = prefix.split_whitespace().collect();
        let mut out = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let tok = tokens[i];

            if tok.contains('-') {
                out.push(tok.to_string());
                i += 1;
                continue;
            }

            if is_all_uppercase(tok) && tok.chars().count() >= 2 {
                if let Some(&next) = tokens.get(i + 1) {
                    if !is_all_uppercase(next)
                        && !self.time_range.is_match(next)
                        && !next.chars().any(char::is_numeric)
                        && !next.contains('-')
                    {
                        out.push(format!("{} {}", tok, next));
                        i += 2;
                        continue;
                    }
                }
                out.push(tok.to_string());
                i += 1;
                continue;
            }

            out.push(tok.to_string());
            i += 1;
        }

        out
    }

    /// Split text starting at a time-range into one token per shift.
    ///
    /// Each token runs from a time-range match up to (not including) the next
    /// time-range match or end of string, so trailing annotations like a
    /// numeric pay code stay attached to their shift. A rest with no match
    /// degrades to a single token.
    pub fn split_shifts(&self, rest: &str) -> Vec<String> {
        let trimmed = rest.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let starts: Vec<usize> = self
            .time_range
            .find_iter(trimmed)
            .map(|m| m.start())
            .collect();
        if starts.is_empty() {
            return vec![trimmed.to_string()];
        }

        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(trimmed.len());
                trimmed[start..end].trim().to_string()
            })
            .collect()
    }

    /// Split a time-range-free line at the first whitespace-surrounded dash.
    ///
    /// `"bf -   700"` becomes `["bf", "- 700"]`: the left part keeps its own
    /// token, the right part is re-prefixed with `"- "` so the continuation
    /// fragment stays recognizable. Lines without a separator dash, and
    /// degenerate splits where both sides are empty, pass through unchanged.
    pub fn split_dash_pair(&self, line: &str) -> Vec<String> {
        let s = line.trim();
        if s.is_empty() {
            return Vec::new();
        }
        if self.time_range.is_match(s) {
            return vec![s.to_string()];
        }

        if self.dash_separator.is_match(s) {
            let mut parts = self.dash_separator.splitn(s, 2);
            let left = parts.next().unwrap_or("").trim();
            let right = parts.next().unwrap_or("").trim_end();

            let mut out = Vec::new();
            if !left.is_empty() {
                out.push(left.to_string());
            }
            if !right.is_empty() {
                out.push(format!("- {}", right));
            }
            if out.is_empty() {
                return vec![s.to_string()];
            }
            return out;
        }

        vec![s.to_string()]
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// At least one cased character, and no cased character is lowercase.
/// Uncased characters (digits, punctuation) do not disqualify a token.
fn is_all_uppercase(token: &str) -> bool {
    let mut has_cased = false;
    for ch in token.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
