//! Date-range narrowing of a raw batch before expansion.

use chrono::NaiveDate;
use serde_json::Value;

use altistat_core::dates::parse_iso_date;
use altistat_core::error::{AltistatError, Result};
use altistat_core::models::RawRecord;

/// Parse optional CLI date bounds and check their ordering.
///
/// Either bound may be absent. A start after the end is a validation error
/// that aborts the run.
pub fn parse_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(Option<NaiveDate>, Option<NaiveDate>)> {
    let start = start.map(parse_iso_date).transpose()?;
    let end = end.map(parse_iso_date).transpose()?;

    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            return Err(AltistatError::DateRangeOrder { start: s, end: e });
        }
    }
    Ok((start, end))
}

/// Keep only rows whose date falls within `[start, end]`, inclusive.
///
/// With both bounds absent the batch passes through untouched (malformed
/// rows included — the lenient skip belongs to expansion). With any bound
/// present, rows that cannot be parsed are dropped, since they have no date
/// to compare.
pub fn filter_by_date_range(
    rows: &[Value],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<Value> {
    if start.is_none() && end.is_none() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|value| {
            let Some(record) = RawRecord::from_value(value) else {
                return false;
            };
            if start.is_some_and(|s| record.date < s) {
                return false;
            }
            if end.is_some_and(|e| record.date > e) {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn batch() -> Vec<Value> {
        vec![
            json!(["2024-05-01", false, false, "a"]),
            json!(["2024-05-15", true, false, "b"]),
            json!(["2024-05-31", false, true, "c"]),
        ]
    }

    // ── parse_range ───────────────────────────────────────────────────────────

    #[test]
    fn test_parse_range_both_absent() {
        assert_eq!(parse_range(None, None).unwrap(), (None, None));
    }

    #[test]
    fn test_parse_range_valid_bounds() {
        let (start, end) = parse_range(Some("2024-05-01"), Some("2024-05-31")).unwrap();
        assert_eq!(start, Some(ymd(2024, 5, 1)));
        assert_eq!(end, Some(ymd(2024, 5, 31)));
    }

    #[test]
    fn test_parse_range_reversed_is_error() {
        let err = parse_range(Some("2024-06-01"), Some("2024-05-01")).unwrap_err();
        assert!(matches!(err, AltistatError::DateRangeOrder { .. }));
    }

    #[test]
    fn test_parse_range_invalid_date_is_error() {
        assert!(parse_range(Some("01-05-2024"), None).is_err());
    }

    #[test]
    fn test_parse_range_equal_bounds_ok() {
        assert!(parse_range(Some("2024-05-01"), Some("2024-05-01")).is_ok());
    }

    // ── filter_by_date_range ──────────────────────────────────────────────────

    #[test]
    fn test_filter_no_bounds_returns_everything() {
        let rows = batch();
        assert_eq!(filter_by_date_range(&rows, None, None), rows);
    }

    #[test]
    fn test_filter_no_bounds_keeps_malformed_rows() {
        let mut rows = batch();
        rows.push(json!({"legacy": true}));
        assert_eq!(filter_by_date_range(&rows, None, None).len(), 4);
    }

    #[test]
    fn test_filter_is_inclusive_on_both_ends() {
        let rows = batch();
        let kept = filter_by_date_range(&rows, Some(ymd(2024, 5, 1)), Some(ymd(2024, 5, 31)));
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_filter_start_only() {
        let rows = batch();
        let kept = filter_by_date_range(&rows, Some(ymd(2024, 5, 10)), None);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_filter_end_only() {
        let rows = batch();
        let kept = filter_by_date_range(&rows, None, Some(ymd(2024, 5, 14)));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_filter_drops_malformed_rows_when_bounded() {
        let mut rows = batch();
        rows.push(json!(["bad-date", false, false, "x"]));
        let kept = filter_by_date_range(&rows, Some(ymd(2024, 5, 1)), None);
        assert_eq!(kept.len(), 3);
    }
}
