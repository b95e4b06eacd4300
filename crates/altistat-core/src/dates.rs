//! Textual date parsing for localized calendar-cell headers.
//!
//! Cell headers look like `"27. maj"` but can carry extra ordinals such as
//! `"2. pinsedag 27. maj"`, so the parser scans candidate matches from the
//! last to the first and resolves the month word against a fixed English +
//! Danish name table.

use regex::Regex;

use crate::error::{AltistatError, Result};
use crate::text::strip_invisible;

/// Resolve a normalized month token to its month number.
///
/// Covers English short and full names, Danish abbreviations with and without
/// a trailing dot, and Danish full names.
fn month_number(token: &str) -> Option<u32> {
    let month = match token {
        "jan" | "jan." | "january" | "januar" => 1,
        "feb" | "feb." | "february" | "februar" => 2,
        "mar" | "mar." | "march" | "marts" => 3,
        "apr" | "apr." | "april" => 4,
        "may" | "maj" => 5,
        "jun" | "jun." | "june" | "juni" => 6,
        "jul" | "jul." | "july" | "juli" => 7,
        "aug" | "aug." | "august" => 8,
        "sep" | "sep." | "sept" | "september" => 9,
        "oct" | "okt" | "okt." | "october" | "oktober" => 10,
        "nov" | "nov." | "november" => 11,
        "dec" | "dec." | "december" => 12,
        _ => return None,
    };
    Some(month)
}

/// Extracts a (day, month) pair from free-form localized date text.
pub struct DayMonthParser {
    pattern: Regex,
}

impl DayMonthParser {
    pub fn new() -> Self {
        Self {
            // 1-2 digit day, dot, then a word of (possibly accented) letters
            // and dots.
            pattern: Regex::new(r"(\d{1,2})\.\s*([A-Za-zÆØÅæøå.]+)").expect("regex is valid"),
        }
    }

    /// Parse `text` into `(day, month)`.
    ///
    /// All `<digits>. <word>` occurrences are collected and scanned from the
    /// last to the first, so the actual date wins over an embedded holiday
    /// ordinal like `"2. pinsedag"`. For each candidate word three forms are
    /// tried in order: verbatim, trailing dot removed, and truncated to the
    /// first three letters. Fails with [`AltistatError::DayMonthParse`] when
    /// nothing resolves.
    pub fn parse(&self, text: &str) -> Result<(u32, u32)> {
        let collapsed = strip_invisible(&text.split_whitespace().collect::<Vec<_>>().join(" "));

        let matches: Vec<(u32, &str)> = self
            .pattern
            .captures_iter(&collapsed)
            .map(|cap| {
                let day = cap[1].parse::<u32>().expect("1-2 digits always fit u32");
                (day, cap.get(2).expect("group 2 is not optional").as_str())
            })
            .collect();

        if matches.is_empty() {
            return Err(AltistatError::DayMonthParse(text.to_string()));
        }

        for (day, word) in matches.iter().rev() {
            let token: String = word
                .to_lowercase()
                .chars()
                .filter(|c| matches!(c, 'a'..='z' | 'æ' | 'ø' | 'å' | '.'))
                .collect();
            let no_dot = token.trim_end_matches('.');
            let first_three: String = no_dot.chars().take(3).collect();

            for candidate in [token.as_str(), no_dot, first_three.as_str()] {
                if let Some(month) = month_number(candidate) {
                    return Ok((*day, month));
                }
            }
        }

        Err(AltistatError::DayMonthParse(text.to_string()))
    }
}

impl Default for DayMonthParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Strict `YYYY-MM-DD` parsing for CLI arguments and batch validation.
pub fn parse_iso_date(s: &str) -> Result<chrono::NaiveDate> {
    if !is_iso_date_shaped(s) {
        return Err(AltistatError::InvalidDate(s.to_string()));
    }
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AltistatError::InvalidDate(s.to_string()))
}

/// Shape check only: four digits, dash, two digits, dash, two digits.
pub fn is_iso_date_shaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit())
}
