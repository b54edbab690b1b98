//! Fiscal year computation.

use chrono::{Datelike, NaiveDate};

/// Default month (1-12) the fiscal year begins.
pub const DEFAULT_FISCAL_START_MONTH: u32 = 7;

/// Returns the fiscal-year label covering `date`.
///
/// With a July start, `2025-03-01` falls in `"2024-2025"` and `2025-08-01`
/// in `"2025-2026"`. A `start_month` outside 1-12 is clamped to the default.
#[must_use]
pub fn fiscal_year_for(date: NaiveDate, start_month: u32) -> String {
    let start_month = if (1..=12).contains(&start_month) {
        start_month
    } else {
        DEFAULT_FISCAL_START_MONTH
    };

    let year = date.year();
    if date.month() >= start_month {
        format!("{year}-{}", year + 1)
    } else {
        format!("{}-{year}", year - 1)
    }
}

/// Returns true if `label` has the `"YYYY-YYYY"` shape of consecutive years.
#[must_use]
pub fn is_valid_label(label: &str) -> bool {
    let Some((first, second)) = label.split_once('-') else {
        return false;
    };
    if first.len() != 4 || second.len() != 4 {
        return false;
    }
    match (first.parse::<i32>(), second.parse::<i32>()) {
        (Ok(a), Ok(b)) => b == a + 1,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2025, 3, 1), "2024-2025")]
    #[case(date(2025, 8, 1), "2025-2026")]
    #[case(date(2025, 7, 1), "2025-2026")]
    #[case(date(2025, 6, 30), "2024-2025")]
    #[case(date(2024, 12, 31), "2024-2025")]
    #[case(date(2025, 1, 1), "2024-2025")]
    fn test_july_start(#[case] date: NaiveDate, #[case] expected: &str) {
        assert_eq!(fiscal_year_for(date, 7), expected);
    }

    #[test]
    fn test_january_start_matches_calendar_year() {
        assert_eq!(fiscal_year_for(date(2025, 1, 1), 1), "2025-2026");
        assert_eq!(fiscal_year_for(date(2025, 12, 31), 1), "2025-2026");
    }

    #[test]
    fn test_invalid_start_month_falls_back_to_default() {
        assert_eq!(fiscal_year_for(date(2025, 3, 1), 0), "2024-2025");
        assert_eq!(fiscal_year_for(date(2025, 3, 1), 13), "2024-2025");
    }

    #[test]
    fn test_label_validation() {
        assert!(is_valid_label("2024-2025"));
        assert!(!is_valid_label("2024-2026"));
        assert!(!is_valid_label("2024"));
        assert!(!is_valid_label("24-25"));
        assert!(!is_valid_label("abcd-efgh"));
    }

    proptest! {
        /// Every computed label is two consecutive years and contains the
        /// date's own year on one side.
        #[test]
        fn prop_label_is_consecutive_years(
            year in 1980i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            start_month in 1u32..=12,
        ) {
            let d = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let label = fiscal_year_for(d, start_month);
            prop_assert!(is_valid_label(&label));
            prop_assert!(label.contains(&year.to_string()));
        }

        /// Dates in the start month itself always open a new fiscal year.
        #[test]
        fn prop_start_month_opens_year(
            year in 1980i32..2100,
            start_month in 1u32..=12,
        ) {
            let d = NaiveDate::from_ymd_opt(year, start_month, 1).unwrap();
            let label = fiscal_year_for(d, start_month);
            prop_assert_eq!(label, format!("{year}-{}", year + 1));
        }
    }
}
