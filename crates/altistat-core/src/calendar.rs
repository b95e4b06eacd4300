//! Danish calendar rules: weekend classification, Easter computus and the
//! conservative national-holiday set with a per-year cache.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Returns `true` for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Easter Sunday in the Gregorian calendar (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("computus always yields a valid March/April date")
}

/// Per-year cache of the Danish national-holiday set.
///
/// The set is conservative: New Year's Day, Maundy Thursday, Good Friday,
/// Easter Sunday, Easter Monday, Ascension Day, Whit Sunday, Whit Monday,
/// Christmas Day and Second Christmas Day. Ten dates per year, computed once
/// per year key and immutable afterwards.
#[derive(Debug, Default)]
pub struct HolidayCalendar {
    by_year: HashMap<i32, HashSet<NaiveDate>>,
}

impl HolidayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// The holiday set for `year`, computed on first access.
    pub fn holidays(&mut self, year: i32) -> &HashSet<NaiveDate> {
        self.by_year.entry(year).or_insert_with(|| compute_holidays(year))
    }

    /// Returns `true` when `date` is a Danish national holiday.
    pub fn is_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays(date.year()).contains(&date)
    }
}

fn compute_holidays(year: i32) -> HashSet<NaiveDate> {
    let easter = easter_sunday(year);
    let ymd = |m, d| {
        NaiveDate::from_ymd_opt(year, m, d).expect("fixed-date holidays are always valid")
    };
    let after = |days| easter + Days::new(days);
    let before = |days| easter - Days::new(days);

    HashSet::from([
        ymd(1, 1),    // Nytårsdag
        before(3),    // Skærtorsdag
        before(2),    // Langfredag
        easter,       // Påskedag
        after(1),     // 2. Påskedag
        after(39),    // Kristi Himmelfart
        after(49),    // Pinsedag
        after(50),    // 2. Pinsedag
        ymd(12, 25),  // Juledag
        ymd(12, 26),  // 2. Juledag
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── is_weekend ────────────────────────────────────────────────────────────

    #[test]
    fn test_is_weekend_saturday_and_sunday() {
        assert!(is_weekend(ymd(2024, 5, 25))); // Saturday
        assert!(is_weekend(ymd(2024, 5, 26))); // Sunday
    }

    #[test]
    fn test_is_weekend_weekday() {
        assert!(!is_weekend(ymd(2024, 5, 27))); // Monday
        assert!(!is_weekend(ymd(2024, 5, 31))); // Friday
    }

    // ── easter_sunday ─────────────────────────────────────────────────────────

    #[test]
    fn test_easter_sunday_known_years() {
        assert_eq!(easter_sunday(2024), ymd(2024, 3, 31));
        assert_eq!(easter_sunday(2025), ymd(2025, 4, 20));
        assert_eq!(easter_sunday(2026), ymd(2026, 4, 5));
        assert_eq!(easter_sunday(2000), ymd(2000, 4, 23));
    }

    #[test]
    fn test_easter_sunday_is_always_a_sunday() {
        for year in 1900..2200 {
            assert_eq!(
                easter_sunday(year).weekday(),
                Weekday::Sun,
                "Easter {} is not a Sunday",
                year
            );
        }
    }

    // ── HolidayCalendar ───────────────────────────────────────────────────────

    #[test]
    fn test_holidays_exactly_ten_distinct_dates() {
        let mut cal = HolidayCalendar::new();
        for year in [1999, 2024, 2025, 2026, 2100] {
            assert_eq!(cal.holidays(year).len(), 10, "year {}", year);
        }
    }

    #[test]
    fn test_holidays_2024_movable_feasts() {
        let mut cal = HolidayCalendar::new();
        let hol = cal.holidays(2024);
        assert!(hol.contains(&ymd(2024, 3, 28))); // Skærtorsdag
        assert!(hol.contains(&ymd(2024, 3, 29))); // Langfredag
        assert!(hol.contains(&ymd(2024, 4, 1))); // 2. Påskedag
        assert!(hol.contains(&ymd(2024, 5, 9))); // Kristi Himmelfart
        assert!(hol.contains(&ymd(2024, 5, 19))); // Pinsedag
        assert!(hol.contains(&ymd(2024, 5, 20))); // 2. Pinsedag
    }

    #[test]
    fn test_holidays_fixed_dates() {
        let mut cal = HolidayCalendar::new();
        let hol = cal.holidays(2025);
        assert!(hol.contains(&ymd(2025, 1, 1)));
        assert!(hol.contains(&ymd(2025, 12, 25)));
        assert!(hol.contains(&ymd(2025, 12, 26)));
    }

    #[test]
    fn test_is_holiday_caches_per_year() {
        let mut cal = HolidayCalendar::new();
        assert!(cal.is_holiday(ymd(2024, 5, 20)));
        assert!(!cal.is_holiday(ymd(2024, 5, 21)));
        // Second lookup hits the cached set.
        assert!(cal.is_holiday(ymd(2024, 5, 20)));
        assert_eq!(cal.by_year.len(), 1);
    }

    #[test]
    fn test_is_holiday_grundlovsdag_is_not_included() {
        // Constitution Day is deliberately not in the conservative set.
        let mut cal = HolidayCalendar::new();
        assert!(!cal.is_holiday(ymd(2024, 6, 5)));
    }
}
