use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};

/// One calendar day's unprocessed data as scraped or loaded from a batch file.
///
/// Persisted as a 4-element array `[date_iso, is_weekend, is_holiday, markup]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Calendar date, no time component.
    pub date: NaiveDate,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// Danish public holiday (or flagged as one in the source markup).
    pub is_holiday: bool,
    /// Markup fragment describing the day's shifts.
    pub markup: String,
}

impl RawRecord {
    /// Lenient conversion from a raw batch row.
    ///
    /// Returns `None` when the row is not a 4-element
    /// `[string, bool, bool, string]` array or the date string does not parse
    /// as `YYYY-MM-DD`. Cached batches accumulate heterogeneous shapes over
    /// time, so malformed rows are a skip, never an error.
    pub fn from_value(value: &Value) -> Option<Self> {
        let row = value.as_array()?;
        if row.len() != 4 {
            return None;
        }
        let date = NaiveDate::parse_from_str(row[0].as_str()?, "%Y-%m-%d").ok()?;
        Some(Self {
            date,
            is_weekend: row[1].as_bool()?,
            is_holiday: row[2].as_bool()?,
            markup: row[3].as_str()?.to_string(),
        })
    }

    /// Serialize back to the persisted 4-element row shape.
    pub fn to_value(&self) -> Value {
        json!([
            self.date_iso(),
            self.is_weekend,
            self.is_holiday,
            self.markup
        ])
    }

    /// The date formatted as `YYYY-MM-DD`.
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// One (date, token) pairing derived from a [`RawRecord`].
///
/// Created transiently during expansion; `markup` is retained for
/// traceability, not re-derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedRecord {
    pub date: NaiveDate,
    /// One normalized line of text after classification.
    pub token: String,
    pub is_weekend: bool,
    pub is_holiday: bool,
    /// The source markup fragment the token came from.
    pub markup: String,
}

impl ExpandedRecord {
    /// Serialize as the 5-element expanded-output row
    /// `[date_iso, token, is_weekend, is_holiday, markup]`.
    pub fn to_value(&self) -> Value {
        json!([
            self.date.format("%Y-%m-%d").to_string(),
            self.token,
            self.is_weekend,
            self.is_holiday,
            self.markup
        ])
    }
}

/// Aggregate counts of an exact-match token across a batch.
///
/// Derived, recomputed per query, never cached across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TermStats {
    /// The searched token, exact match.
    pub term: String,
    /// All occurrences.
    pub total: u64,
    /// Occurrences on days that are a weekend or a holiday.
    pub total_weekend_or_holiday: u64,
    /// Distinct dates with at least one occurrence.
    pub unique_days: usize,
    /// Distinct weekend-or-holiday dates with at least one occurrence.
    pub unique_days_weekend_or_holiday: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── RawRecord::from_value ─────────────────────────────────────────────────

    #[test]
    fn test_from_value_valid_row() {
        let row = json!(["2024-05-27", false, true, "07:45 - 15:30 100"]);
        let rec = RawRecord::from_value(&row).unwrap();
        assert_eq!(rec.date, ymd(2024, 5, 27));
        assert!(!rec.is_weekend);
        assert!(rec.is_holiday);
        assert_eq!(rec.markup, "07:45 - 15:30 100");
    }

    #[test]
    fn test_from_value_wrong_length() {
        let row = json!(["2024-05-27", false, true]);
        assert!(RawRecord::from_value(&row).is_none());
    }

    #[test]
    fn test_from_value_not_an_array() {
        let row = json!({"date": "2024-05-27"});
        assert!(RawRecord::from_value(&row).is_none());
    }

    #[test]
    fn test_from_value_bad_date() {
        let row = json!(["not-a-date", false, false, ""]);
        assert!(RawRecord::from_value(&row).is_none());
    }

    #[test]
    fn test_from_value_wrong_types() {
        let row = json!(["2024-05-27", "false", false, ""]);
        assert!(RawRecord::from_value(&row).is_none());
    }

    #[test]
    fn test_raw_record_round_trip() {
        let row = json!(["2024-05-27", true, false, "bf - 700"]);
        let rec = RawRecord::from_value(&row).unwrap();
        assert_eq!(rec.to_value(), row);
    }

    // ── ExpandedRecord ────────────────────────────────────────────────────────

    #[test]
    fn test_expanded_record_to_value() {
        let rec = ExpandedRecord {
            date: ymd(2024, 5, 27),
            token: "VITA dagtid".to_string(),
            is_weekend: false,
            is_holiday: true,
            markup: "VITA dagtid<br/>07:45 - 15:30".to_string(),
        };
        assert_eq!(
            rec.to_value(),
            json!([
                "2024-05-27",
                "VITA dagtid",
                false,
                true,
                "VITA dagtid<br/>07:45 - 15:30"
            ])
        );
    }

    // ── TermStats ─────────────────────────────────────────────────────────────

    #[test]
    fn test_term_stats_default_is_all_zero() {
        let stats = TermStats::default();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.total_weekend_or_holiday, 0);
        assert_eq!(stats.unique_days, 0);
        assert_eq!(stats.unique_days_weekend_or_holiday, 0);
    }
}
