//! Certificate domain types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Certificate status in the issuance workflow.
///
/// The valid transitions are:
/// - Pending → Approved (approve)
/// - Pending → Rejected (reject)
/// - Approved → Issued (issue)
///
/// `Issued` and `Rejected` are terminal; `Issued` is additionally reachable
/// at creation through the administrator fast path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateStatus {
    /// Application received, awaiting review.
    Pending,
    /// Application approved, awaiting issuance.
    Approved,
    /// Application rejected (terminal).
    Rejected,
    /// Certificate issued with a number and ledger entry (terminal).
    Issued,
}

impl CertificateStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Issued => "issued",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "issued" => Some(Self::Issued),
            _ => None,
        }
    }

    /// Returns true if no further transition is possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Issued)
    }
}

impl fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical certificate type kind.
///
/// The kind is stored once on the certificate type and selects the payload
/// variant; localized display names are data, never matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateKind {
    /// Trade license with business particulars.
    TradeLicense,
    /// Succession certificate with a deceased person and ordered heirs.
    Succession,
    /// Any other attestation carried as free-form narrative.
    General,
}

impl CertificateKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TradeLicense => "trade_license",
            Self::Succession => "succession",
            Self::General => "general",
        }
    }

    /// Parses a kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trade_license" => Some(Self::TradeLicense),
            "succession" => Some(Self::Succession),
            "general" => Some(Self::General),
            _ => None,
        }
    }
}

impl fmt::Display for CertificateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(CertificateStatus::Pending.as_str(), "pending");
        assert_eq!(CertificateStatus::Approved.as_str(), "approved");
        assert_eq!(CertificateStatus::Rejected.as_str(), "rejected");
        assert_eq!(CertificateStatus::Issued.as_str(), "issued");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            CertificateStatus::parse("PENDING"),
            Some(CertificateStatus::Pending)
        );
        assert_eq!(
            CertificateStatus::parse("issued"),
            Some(CertificateStatus::Issued)
        );
        assert_eq!(CertificateStatus::parse("draft"), None);
    }

    #[test]
    fn test_status_terminal() {
        assert!(!CertificateStatus::Pending.is_terminal());
        assert!(!CertificateStatus::Approved.is_terminal());
        assert!(CertificateStatus::Rejected.is_terminal());
        assert!(CertificateStatus::Issued.is_terminal());
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in [
            CertificateKind::TradeLicense,
            CertificateKind::Succession,
            CertificateKind::General,
        ] {
            assert_eq!(CertificateKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(CertificateKind::parse("Trade License"), None);
    }
}
