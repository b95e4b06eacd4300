//! Statistics over the expanded token stream.
//!
//! Both queries consume the lazy expansion in a single pass; the full
//! expanded sequence is never materialized.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde_json::Value;

use altistat_core::models::TermStats;

use crate::expander::RowExpander;

/// Leading characters that mark a summary token as noise.
const NOISE_PREFIXES: [char; 5] = ['/', '-', '*', '%', '+'];

// ── Per-term statistics ───────────────────────────────────────────────────────

/// Exact-match statistics for each of `terms` over the expanded stream.
///
/// Terms that never occur report all-zero stats rather than being absent.
pub fn term_stats(
    rows: &[Value],
    terms: &[String],
    expander: &RowExpander,
) -> HashMap<String, TermStats> {
    let wanted: HashSet<&str> = terms.iter().map(String::as_str).collect();

    let mut totals: HashMap<String, u64> = HashMap::new();
    let mut woh_totals: HashMap<String, u64> = HashMap::new();
    let mut days: HashMap<String, HashSet<NaiveDate>> = HashMap::new();
    let mut woh_days: HashMap<String, HashSet<NaiveDate>> = HashMap::new();

    for record in expander.expand(rows) {
        if !wanted.contains(record.token.as_str()) {
            continue;
        }
        *totals.entry(record.token.clone()).or_default() += 1;
        days.entry(record.token.clone())
            .or_default()
            .insert(record.date);
        if record.is_weekend || record.is_holiday {
            *woh_totals.entry(record.token.clone()).or_default() += 1;
            woh_days
                .entry(record.token.clone())
                .or_default()
                .insert(record.date);
        }
    }

    terms
        .iter()
        .map(|term| {
            let stats = TermStats {
                term: term.clone(),
                total: totals.get(term).copied().unwrap_or(0),
                total_weekend_or_holiday: woh_totals.get(term).copied().unwrap_or(0),
                unique_days: days.get(term).map_or(0, HashSet::len),
                unique_days_weekend_or_holiday: woh_days.get(term).map_or(0, HashSet::len),
            };
            (term.clone(), stats)
        })
        .collect()
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// Options for the [`summary`] query.
#[derive(Debug, Clone, Copy)]
pub struct SummaryOptions {
    /// Keep tokens that start with a shift time-range.
    pub include_time: bool,
    /// Drop tokens with a leading operator character or a bare 3-digit code.
    pub filter_noise: bool,
}

/// Count every distinct token over the expanded stream.
///
/// Ordered by descending count; ties keep first-encountered order.
pub fn summary(
    rows: &[Value],
    options: SummaryOptions,
    expander: &RowExpander,
) -> Vec<(String, u64)> {
    let mut counts: HashMap<String, (u64, usize)> = HashMap::new();
    let mut next_rank = 0usize;

    for record in expander.expand(rows) {
        if !options.include_time && expander.classifier().is_time_line(&record.token) {
            continue;
        }
        if options.filter_noise && is_noise(&record.token) {
            continue;
        }
        let entry = counts.entry(record.token).or_insert_with(|| {
            let rank = next_rank;
            next_rank += 1;
            (0, rank)
        });
        entry.0 += 1;
    }

    let mut out: Vec<(String, u64, usize)> = counts
        .into_iter()
        .map(|(token, (count, rank))| (token, count, rank))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    out.into_iter().map(|(token, count, _)| (token, count)).collect()
}

/// A token is noise when it starts with an operator character or is exactly
/// three ASCII digits (the bare pay codes).
fn is_noise(token: &str) -> bool {
    let t = token.trim();
    if t.is_empty() {
        return true;
    }
    if t.starts_with(&NOISE_PREFIXES[..]) {
        return true;
    }
    t.len() == 3 && t.bytes().all(|b| b.is_ascii_digit())
}
