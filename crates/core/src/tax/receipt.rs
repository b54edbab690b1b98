//! Tax receipt number scheme.
//!
//! Receipts are numbered `TAX-{year}{month:02}-{4 random digits}`. As with
//! certificate numbers, uniqueness comes from the store's unique column plus
//! bounded regeneration, not from the random suffix alone.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Upper bound for insert attempts before giving up.
pub const MAX_GENERATION_ATTEMPTS: u32 = 5;

/// Generates a candidate receipt number for a payment made on `date`.
#[must_use]
pub fn generate(date: NaiveDate) -> String {
    let suffix: u32 = rand::rng().random_range(0..10_000);
    format!("TAX-{}{:02}-{suffix:04}", date.year(), date.month())
}

/// Returns true if `number` has the shape of a receipt number.
#[must_use]
pub fn is_well_formed(number: &str) -> bool {
    let Some(rest) = number.strip_prefix("TAX-") else {
        return false;
    };
    let Some((stamp, suffix)) = rest.split_once('-') else {
        return false;
    };
    stamp.len() == 6
        && suffix.len() == 4
        && stamp.bytes().all(|b| b.is_ascii_digit())
        && suffix.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_shape() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
        let number = generate(date);
        assert!(number.starts_with("TAX-202508-"));
        assert!(is_well_formed(&number));
    }

    #[test]
    fn test_month_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let number = generate(date);
        assert!(number.starts_with("TAX-202503-"));
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed("TAX-202508-0042"));
        assert!(!is_well_formed("TAX-20258-0042"));
        assert!(!is_well_formed("TAX-202508-42"));
        assert!(!is_well_formed("RCPT-202508-0042"));
        assert!(!is_well_formed("TAX-2025AB-0042"));
    }
}
