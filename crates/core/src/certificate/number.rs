//! Certificate number scheme.
//!
//! A certificate number is exactly 17 numeric characters: a 9-digit
//! deterministic prefix followed by 8 random decimal digits. The prefix is
//! the linked citizen's 4-digit birth year plus the office's 5-digit
//! jurisdiction code; unlinked (non-resident) applicants get the current year
//! plus a distinct 5-digit sentinel code, keeping the two populations
//! visually distinguishable.
//!
//! Uniqueness is never trusted to randomness: callers insert under a unique
//! column and regenerate on conflict, bounded by [`MAX_GENERATION_ATTEMPTS`].

use rand::Rng;

use crate::certificate::error::CertificateError;

/// Total length of a certificate number.
pub const CERTIFICATE_NUMBER_LEN: usize = 17;

/// Upper bound for insert attempts before giving up with
/// `CertificateError::GenerationExhausted`.
pub const MAX_GENERATION_ATTEMPTS: u32 = 5;

/// The five-digit office codes stamped into certificate numbers.
#[derive(Debug, Clone)]
pub struct JurisdictionCodes {
    /// Code for certificates linked to a registered citizen.
    pub resident: String,
    /// Sentinel code for manual/non-resident applicants.
    pub non_resident: String,
}

impl JurisdictionCodes {
    /// Creates a validated code pair.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::InvalidJurisdictionCode` if either code is
    /// not exactly five decimal digits.
    pub fn new(resident: &str, non_resident: &str) -> Result<Self, CertificateError> {
        for code in [resident, non_resident] {
            if code.len() != 5 || !code.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CertificateError::InvalidJurisdictionCode(code.to_string()));
            }
        }
        Ok(Self {
            resident: resident.to_string(),
            non_resident: non_resident.to_string(),
        })
    }
}

/// Generates a candidate certificate number.
///
/// `birth_year` is the linked citizen's birth year; `None` marks a
/// non-resident applicant, stamped with `current_year` and the sentinel code.
///
/// # Errors
///
/// Returns `CertificateError::InvalidNumberYear` if the year does not render
/// as four digits.
pub fn generate(
    birth_year: Option<i32>,
    current_year: i32,
    codes: &JurisdictionCodes,
) -> Result<String, CertificateError> {
    let (year, code) = match birth_year {
        Some(year) => (year, codes.resident.as_str()),
        None => (current_year, codes.non_resident.as_str()),
    };

    if !(1000..=9999).contains(&year) {
        return Err(CertificateError::InvalidNumberYear(year));
    }

    let suffix: u32 = rand::rng().random_range(0..100_000_000);
    Ok(format!("{year}{code}{suffix:08}"))
}

/// Returns true if `number` has the shape of a certificate number.
#[must_use]
pub fn is_well_formed(number: &str) -> bool {
    number.len() == CERTIFICATE_NUMBER_LEN && number.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn codes() -> JurisdictionCodes {
        JurisdictionCodes::new("41725", "99990").unwrap()
    }

    #[test]
    fn test_codes_must_be_five_digits() {
        assert!(JurisdictionCodes::new("41725", "99990").is_ok());
        assert!(matches!(
            JurisdictionCodes::new("4172", "99990"),
            Err(CertificateError::InvalidJurisdictionCode(_))
        ));
        assert!(matches!(
            JurisdictionCodes::new("41725", "9999A"),
            Err(CertificateError::InvalidJurisdictionCode(_))
        ));
    }

    #[test]
    fn test_resident_number_shape() {
        let number = generate(Some(1990), 2025, &codes()).unwrap();
        assert_eq!(number.len(), CERTIFICATE_NUMBER_LEN);
        assert!(is_well_formed(&number));
        assert!(number.starts_with("199041725"));
    }

    #[test]
    fn test_non_resident_number_shape() {
        let number = generate(None, 2025, &codes()).unwrap();
        assert_eq!(number.len(), CERTIFICATE_NUMBER_LEN);
        assert!(number.starts_with("202599990"));
    }

    #[test]
    fn test_out_of_range_year_rejected() {
        assert!(generate(Some(999), 2025, &codes()).is_err());
        assert!(generate(Some(10000), 2025, &codes()).is_err());
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed("19904172500000001"));
        assert!(!is_well_formed("1990417250000000"));
        assert!(!is_well_formed("19904172500000001X"));
        assert!(!is_well_formed("199041725000000ab"));
    }

    proptest! {
        /// Every generated number is 17 digits and carries the expected prefix.
        #[test]
        fn prop_generated_numbers_keep_shape(birth_year in 1900i32..2100) {
            let number = generate(Some(birth_year), 2025, &codes()).unwrap();
            prop_assert_eq!(number.len(), CERTIFICATE_NUMBER_LEN);
            prop_assert!(is_well_formed(&number));
            let expected_prefix = format!("{birth_year}41725");
            prop_assert!(number.starts_with(&expected_prefix));
        }
    }
}
