//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `CitizenId` where a
//! `CertificateId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(CitizenId, "Unique identifier for a citizen.");
typed_id!(HouseholdId, "Unique identifier for a household.");
typed_id!(CertificateId, "Unique identifier for a certificate.");
typed_id!(
    CertificateTypeId,
    "Unique identifier for a certificate type."
);
typed_id!(TaxRecordId, "Unique identifier for a tax payment record.");
typed_id!(
    VerificationTokenId,
    "Unique identifier for a one-time passcode token."
);
typed_id!(AdministratorId, "Unique identifier for an administrator.");
typed_id!(LedgerEntryId, "Unique identifier for a ledger entry.");
typed_id!(NotificationId, "Unique identifier for a notification.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(CitizenId::new(), CitizenId::new());
    }

    #[test]
    fn test_roundtrip_through_string() {
        let id = CertificateId::new();
        let parsed = CertificateId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        assert_eq!(HouseholdId::from_uuid(uuid).into_inner(), uuid);
    }

    #[test]
    fn test_serde_transparent() {
        let id = CitizenId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.0));
    }
}
