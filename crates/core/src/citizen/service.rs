//! Citizen workflow state transitions and identification policy.

use crate::citizen::error::CitizenError;
use crate::citizen::types::CitizenStatus;

/// Stateless service for citizen status transitions.
///
/// All methods are associated functions that validate transitions against
/// the current status before the repository writes anything.
pub struct CitizenWorkflow;

impl CitizenWorkflow {
    /// Validates the administrator-driven transition to `target`.
    ///
    /// # Errors
    ///
    /// Returns `CitizenError::InvalidTransition` unless the citizen is
    /// `Pending` and the target is `Approved` or `Rejected`.
    pub fn set_status(
        current: CitizenStatus,
        target: CitizenStatus,
    ) -> Result<CitizenStatus, CitizenError> {
        if Self::is_valid_transition(current, target) {
            Ok(target)
        } else {
            Err(CitizenError::InvalidTransition {
                from: current,
                to: target,
            })
        }
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Pending → Approved
    /// - Pending → Rejected
    #[must_use]
    pub fn is_valid_transition(from: CitizenStatus, to: CitizenStatus) -> bool {
        matches!(
            (from, to),
            (
                CitizenStatus::Pending,
                CitizenStatus::Approved | CitizenStatus::Rejected
            )
        )
    }

    /// Applies the identification policy to a matched record.
    ///
    /// A record found by (NID, date of birth) is only released to the caller
    /// when it is approved; the two refusal cases carry distinct errors so a
    /// pending applicant is never told their application was rejected.
    ///
    /// # Errors
    ///
    /// Returns `CitizenError::PendingApproval` for a pending record and
    /// `CitizenError::ApplicationRejected` for a rejected one.
    pub fn identify_gate(status: CitizenStatus) -> Result<(), CitizenError> {
        match status {
            CitizenStatus::Approved => Ok(()),
            CitizenStatus::Pending => Err(CitizenError::PendingApproval),
            CitizenStatus::Rejected => Err(CitizenError::ApplicationRejected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_approve_from_pending() {
        let result = CitizenWorkflow::set_status(CitizenStatus::Pending, CitizenStatus::Approved);
        assert_eq!(result.unwrap(), CitizenStatus::Approved);
    }

    #[test]
    fn test_reject_from_pending() {
        let result = CitizenWorkflow::set_status(CitizenStatus::Pending, CitizenStatus::Rejected);
        assert_eq!(result.unwrap(), CitizenStatus::Rejected);
    }

    #[rstest]
    #[case(CitizenStatus::Approved, CitizenStatus::Rejected)]
    #[case(CitizenStatus::Approved, CitizenStatus::Pending)]
    #[case(CitizenStatus::Rejected, CitizenStatus::Approved)]
    #[case(CitizenStatus::Rejected, CitizenStatus::Pending)]
    #[case(CitizenStatus::Pending, CitizenStatus::Pending)]
    fn test_terminal_states_cannot_move(
        #[case] from: CitizenStatus,
        #[case] to: CitizenStatus,
    ) {
        let result = CitizenWorkflow::set_status(from, to);
        assert!(matches!(
            result,
            Err(CitizenError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_is_valid_transition() {
        assert!(CitizenWorkflow::is_valid_transition(
            CitizenStatus::Pending,
            CitizenStatus::Approved
        ));
        assert!(CitizenWorkflow::is_valid_transition(
            CitizenStatus::Pending,
            CitizenStatus::Rejected
        ));
        assert!(!CitizenWorkflow::is_valid_transition(
            CitizenStatus::Approved,
            CitizenStatus::Rejected
        ));
        assert!(!CitizenWorkflow::is_valid_transition(
            CitizenStatus::Rejected,
            CitizenStatus::Approved
        ));
    }

    #[test]
    fn test_identify_gate_approved_passes() {
        assert!(CitizenWorkflow::identify_gate(CitizenStatus::Approved).is_ok());
    }

    #[test]
    fn test_identify_gate_pending_refused() {
        assert!(matches!(
            CitizenWorkflow::identify_gate(CitizenStatus::Pending),
            Err(CitizenError::PendingApproval)
        ));
    }

    #[test]
    fn test_identify_gate_rejected_refused() {
        assert!(matches!(
            CitizenWorkflow::identify_gate(CitizenStatus::Rejected),
            Err(CitizenError::ApplicationRejected)
        ));
    }
}
