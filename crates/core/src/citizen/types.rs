//! Citizen domain types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Citizen status in the approval workflow.
///
/// The valid transitions are:
/// - Pending → Approved (admin approval)
/// - Pending → Rejected (admin rejection)
///
/// Both `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitizenStatus {
    /// Self-applied record awaiting administrator review.
    Pending,
    /// Record confirmed by an administrator.
    Approved,
    /// Record rejected by an administrator.
    Rejected,
}

impl CitizenStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true if no further transition is possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl fmt::Display for CitizenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Citizen gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other.
    Other,
}

impl Gender {
    /// Returns the string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Parses a gender from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// A person's name carried in both registry languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    /// English rendering.
    pub en: String,
    /// Bangla rendering.
    pub bn: String,
}

impl PersonName {
    /// Returns true if both renderings are non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.en.trim().is_empty() && !self.bn.trim().is_empty()
    }
}

/// Structured residential address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Village or street.
    pub village: String,
    /// Post office.
    pub post_office: String,
    /// Postal code.
    pub postal_code: String,
    /// District.
    pub district: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(CitizenStatus::Pending.as_str(), "pending");
        assert_eq!(CitizenStatus::Approved.as_str(), "approved");
        assert_eq!(CitizenStatus::Rejected.as_str(), "rejected");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            CitizenStatus::parse("pending"),
            Some(CitizenStatus::Pending)
        );
        assert_eq!(
            CitizenStatus::parse("APPROVED"),
            Some(CitizenStatus::Approved)
        );
        assert_eq!(
            CitizenStatus::parse("Rejected"),
            Some(CitizenStatus::Rejected)
        );
        assert_eq!(CitizenStatus::parse("invalid"), None);
    }

    #[test]
    fn test_status_terminal() {
        assert!(!CitizenStatus::Pending.is_terminal());
        assert!(CitizenStatus::Approved.is_terminal());
        assert!(CitizenStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_gender_roundtrip() {
        for g in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(Gender::parse(g.as_str()), Some(g));
        }
        assert_eq!(Gender::parse("unknown"), None);
    }

    #[test]
    fn test_person_name_completeness() {
        let name = PersonName {
            en: "Rahim Uddin".to_string(),
            bn: "রহিম উদ্দিন".to_string(),
        };
        assert!(name.is_complete());

        let missing = PersonName {
            en: "Rahim Uddin".to_string(),
            bn: "  ".to_string(),
        };
        assert!(!missing.is_complete());
    }
}
