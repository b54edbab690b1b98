//! Certificate workflow state transitions.

use crate::certificate::error::CertificateError;
use crate::certificate::payload::CertificatePayload;
use crate::certificate::types::{CertificateKind, CertificateStatus};

/// Stateless service for certificate status transitions.
///
/// All methods are associated functions that validate a transition against
/// the current status; the repository performs the actual write only after
/// these checks pass.
pub struct CertificateWorkflow;

impl CertificateWorkflow {
    /// Validates a new application's payload against its type kind.
    ///
    /// # Errors
    ///
    /// Returns the first payload validation failure.
    pub fn validate_application(
        kind: CertificateKind,
        payload: &CertificatePayload,
    ) -> Result<(), CertificateError> {
        payload.validate_for(kind)
    }

    /// Approve a pending application.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::InvalidTransition` if not `Pending`.
    pub fn approve(current: CertificateStatus) -> Result<CertificateStatus, CertificateError> {
        match current {
            CertificateStatus::Pending => Ok(CertificateStatus::Approved),
            _ => Err(CertificateError::InvalidTransition {
                from: current,
                to: CertificateStatus::Approved,
            }),
        }
    }

    /// Reject a pending application.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::InvalidTransition` if not `Pending`.
    pub fn reject(current: CertificateStatus) -> Result<CertificateStatus, CertificateError> {
        match current {
            CertificateStatus::Pending => Ok(CertificateStatus::Rejected),
            _ => Err(CertificateError::InvalidTransition {
                from: current,
                to: CertificateStatus::Rejected,
            }),
        }
    }

    /// Issue an approved certificate.
    ///
    /// `Issued` is reachable only from `Approved` here; the administrator
    /// fast path creates records already issued and never passes through
    /// this transition.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::InvalidTransition` if not `Approved`.
    pub fn issue(current: CertificateStatus) -> Result<CertificateStatus, CertificateError> {
        match current {
            CertificateStatus::Approved => Ok(CertificateStatus::Issued),
            _ => Err(CertificateError::InvalidTransition {
                from: current,
                to: CertificateStatus::Issued,
            }),
        }
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Pending → Approved (approve)
    /// - Pending → Rejected (reject)
    /// - Approved → Issued (issue)
    #[must_use]
    pub fn is_valid_transition(from: CertificateStatus, to: CertificateStatus) -> bool {
        matches!(
            (from, to),
            (
                CertificateStatus::Pending,
                CertificateStatus::Approved | CertificateStatus::Rejected
            ) | (CertificateStatus::Approved, CertificateStatus::Issued)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_approve_from_pending() {
        let result = CertificateWorkflow::approve(CertificateStatus::Pending);
        assert_eq!(result.unwrap(), CertificateStatus::Approved);
    }

    #[test]
    fn test_approve_from_non_pending_fails() {
        for status in [
            CertificateStatus::Approved,
            CertificateStatus::Rejected,
            CertificateStatus::Issued,
        ] {
            assert!(matches!(
                CertificateWorkflow::approve(status),
                Err(CertificateError::InvalidTransition { .. })
            ));
        }
    }

    #[test]
    fn test_reject_from_pending() {
        let result = CertificateWorkflow::reject(CertificateStatus::Pending);
        assert_eq!(result.unwrap(), CertificateStatus::Rejected);
    }

    #[test]
    fn test_issue_from_approved() {
        let result = CertificateWorkflow::issue(CertificateStatus::Approved);
        assert_eq!(result.unwrap(), CertificateStatus::Issued);
    }

    #[test]
    fn test_issue_from_pending_fails() {
        assert!(matches!(
            CertificateWorkflow::issue(CertificateStatus::Pending),
            Err(CertificateError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_issued_is_not_reversible() {
        assert!(CertificateWorkflow::approve(CertificateStatus::Issued).is_err());
        assert!(CertificateWorkflow::reject(CertificateStatus::Issued).is_err());
        assert!(CertificateWorkflow::issue(CertificateStatus::Issued).is_err());
    }

    #[test]
    fn test_is_valid_transition() {
        assert!(CertificateWorkflow::is_valid_transition(
            CertificateStatus::Pending,
            CertificateStatus::Approved
        ));
        assert!(CertificateWorkflow::is_valid_transition(
            CertificateStatus::Pending,
            CertificateStatus::Rejected
        ));
        assert!(CertificateWorkflow::is_valid_transition(
            CertificateStatus::Approved,
            CertificateStatus::Issued
        ));

        assert!(!CertificateWorkflow::is_valid_transition(
            CertificateStatus::Pending,
            CertificateStatus::Issued
        ));
        assert!(!CertificateWorkflow::is_valid_transition(
            CertificateStatus::Rejected,
            CertificateStatus::Approved
        ));
        assert!(!CertificateWorkflow::is_valid_transition(
            CertificateStatus::Issued,
            CertificateStatus::Pending
        ));
    }

    #[test]
    fn test_validate_application_accepts_matching_payload() {
        let payload = CertificatePayload::TradeLicense {
            business_name: "Karim Traders".to_string(),
            business_address: "Station Road".to_string(),
            business_type: "Grocery".to_string(),
            capital: dec!(50000),
        };
        assert!(
            CertificateWorkflow::validate_application(CertificateKind::TradeLicense, &payload)
                .is_ok()
        );
    }

    #[test]
    fn test_validate_application_rejects_wrong_variant() {
        let payload = CertificatePayload::General {
            narrative: "Known to this office".to_string(),
        };
        assert!(matches!(
            CertificateWorkflow::validate_application(CertificateKind::Succession, &payload),
            Err(CertificateError::PayloadMismatch { .. })
        ));
    }
}
