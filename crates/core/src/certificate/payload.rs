//! Type-specific certificate payloads.
//!
//! The payload is a tagged variant keyed by the certificate type's canonical
//! kind. Each variant carries its own validated field set; an untyped open
//! map never enters the system.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::certificate::error::CertificateError;
use crate::certificate::types::CertificateKind;

/// One heir on a succession certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heir {
    /// Heir's full name.
    pub name: String,
    /// Relation to the deceased (e.g. "son", "widow").
    pub relation: String,
    /// Heir's national ID, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nid: Option<String>,
    /// Heir's date of birth, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

/// Type-specific certificate payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CertificatePayload {
    /// Trade license particulars.
    TradeLicense {
        /// Registered business name.
        business_name: String,
        /// Business address.
        business_address: String,
        /// Nature of the business.
        business_type: String,
        /// Declared capital.
        capital: Decimal,
    },
    /// Succession certificate particulars.
    Succession {
        /// Name of the deceased.
        deceased_name: String,
        /// National ID of the deceased.
        deceased_nid: String,
        /// Ordered list of heirs; order is preserved on the certificate.
        heirs: Vec<Heir>,
    },
    /// Free-form narrative for all other certificate types.
    General {
        /// Narrative text placed on the certificate.
        narrative: String,
    },
}

impl CertificatePayload {
    /// Returns the kind this payload belongs to.
    #[must_use]
    pub const fn kind(&self) -> CertificateKind {
        match self {
            Self::TradeLicense { .. } => CertificateKind::TradeLicense,
            Self::Succession { .. } => CertificateKind::Succession,
            Self::General { .. } => CertificateKind::General,
        }
    }

    /// Validates the payload's own field set.
    ///
    /// # Errors
    ///
    /// Returns a `CertificateError` describing the first failed rule.
    pub fn validate(&self) -> Result<(), CertificateError> {
        match self {
            Self::TradeLicense {
                business_name,
                business_address,
                business_type,
                capital,
            } => {
                if business_name.trim().is_empty() {
                    return Err(CertificateError::MissingField("business_name"));
                }
                if business_address.trim().is_empty() {
                    return Err(CertificateError::MissingField("business_address"));
                }
                if business_type.trim().is_empty() {
                    return Err(CertificateError::MissingField("business_type"));
                }
                if *capital <= Decimal::ZERO {
                    return Err(CertificateError::NonPositiveCapital);
                }
                Ok(())
            }
            Self::Succession {
                deceased_name,
                deceased_nid,
                heirs,
            } => {
                if deceased_name.trim().is_empty() {
                    return Err(CertificateError::MissingField("deceased_name"));
                }
                if deceased_nid.trim().is_empty() {
                    return Err(CertificateError::MissingField("deceased_nid"));
                }
                if heirs.is_empty() {
                    return Err(CertificateError::EmptyHeirs);
                }
                for heir in heirs {
                    if heir.name.trim().is_empty() {
                        return Err(CertificateError::MissingField("heir.name"));
                    }
                    if heir.relation.trim().is_empty() {
                        return Err(CertificateError::MissingField("heir.relation"));
                    }
                }
                Ok(())
            }
            Self::General { narrative } => {
                if narrative.trim().is_empty() {
                    return Err(CertificateError::MissingField("narrative"));
                }
                Ok(())
            }
        }
    }

    /// Validates the payload against the certificate type's kind.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::PayloadMismatch` when the variant does not
    /// match `expected`, or the first field-level failure otherwise.
    pub fn validate_for(&self, expected: CertificateKind) -> Result<(), CertificateError> {
        if self.kind() != expected {
            return Err(CertificateError::PayloadMismatch {
                expected,
                got: self.kind(),
            });
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn trade_license() -> CertificatePayload {
        CertificatePayload::TradeLicense {
            business_name: "Karim Traders".to_string(),
            business_address: "Station Road, Mirpur".to_string(),
            business_type: "Grocery".to_string(),
            capital: dec!(150000),
        }
    }

    fn succession() -> CertificatePayload {
        CertificatePayload::Succession {
            deceased_name: "Abdul Karim".to_string(),
            deceased_nid: "1985123456789".to_string(),
            heirs: vec![
                Heir {
                    name: "Rahima Begum".to_string(),
                    relation: "widow".to_string(),
                    nid: Some("1990987654321".to_string()),
                    date_of_birth: None,
                },
                Heir {
                    name: "Selim Karim".to_string(),
                    relation: "son".to_string(),
                    nid: None,
                    date_of_birth: NaiveDate::from_ymd_opt(2005, 4, 12),
                },
            ],
        }
    }

    #[test]
    fn test_valid_trade_license() {
        assert!(trade_license().validate().is_ok());
    }

    #[test]
    fn test_trade_license_missing_name() {
        let payload = CertificatePayload::TradeLicense {
            business_name: "  ".to_string(),
            business_address: "Station Road".to_string(),
            business_type: "Grocery".to_string(),
            capital: dec!(1000),
        };
        assert!(matches!(
            payload.validate(),
            Err(CertificateError::MissingField("business_name"))
        ));
    }

    #[test]
    fn test_trade_license_zero_capital() {
        let payload = CertificatePayload::TradeLicense {
            business_name: "Karim Traders".to_string(),
            business_address: "Station Road".to_string(),
            business_type: "Grocery".to_string(),
            capital: Decimal::ZERO,
        };
        assert!(matches!(
            payload.validate(),
            Err(CertificateError::NonPositiveCapital)
        ));
    }

    #[test]
    fn test_valid_succession() {
        assert!(succession().validate().is_ok());
    }

    #[test]
    fn test_succession_requires_heirs() {
        let payload = CertificatePayload::Succession {
            deceased_name: "Abdul Karim".to_string(),
            deceased_nid: "1985123456789".to_string(),
            heirs: vec![],
        };
        assert!(matches!(payload.validate(), Err(CertificateError::EmptyHeirs)));
    }

    #[test]
    fn test_succession_heir_needs_relation() {
        let payload = CertificatePayload::Succession {
            deceased_name: "Abdul Karim".to_string(),
            deceased_nid: "1985123456789".to_string(),
            heirs: vec![Heir {
                name: "Selim Karim".to_string(),
                relation: String::new(),
                nid: None,
                date_of_birth: None,
            }],
        };
        assert!(matches!(
            payload.validate(),
            Err(CertificateError::MissingField("heir.relation"))
        ));
    }

    #[test]
    fn test_general_narrative_required() {
        let payload = CertificatePayload::General {
            narrative: String::new(),
        };
        assert!(matches!(
            payload.validate(),
            Err(CertificateError::MissingField("narrative"))
        ));
    }

    #[test]
    fn test_validate_for_mismatched_kind() {
        let result = trade_license().validate_for(CertificateKind::Succession);
        assert!(matches!(
            result,
            Err(CertificateError::PayloadMismatch {
                expected: CertificateKind::Succession,
                got: CertificateKind::TradeLicense,
            })
        ));
    }

    #[test]
    fn test_validate_for_matching_kind() {
        assert!(succession().validate_for(CertificateKind::Succession).is_ok());
    }

    #[test]
    fn test_payload_json_tagging() {
        let json = serde_json::to_value(&trade_license()).unwrap();
        assert_eq!(json["kind"], "trade_license");

        let back: CertificatePayload = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), CertificateKind::TradeLicense);
    }

    #[test]
    fn test_heir_order_preserved() {
        let CertificatePayload::Succession { heirs, .. } = succession() else {
            unreachable!()
        };
        assert_eq!(heirs[0].relation, "widow");
        assert_eq!(heirs[1].relation, "son");
    }
}
