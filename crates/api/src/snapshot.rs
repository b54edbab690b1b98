//! Degraded-read snapshot for the public verification lookup.
//!
//! Successful live lookups are mirrored here; when the store is unreachable
//! the endpoint serves the mirrored answer, clearly labeled, instead of
//! failing a read-only request.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

use nagorik_db::repositories::certificate::VerifiedCertificate;

/// Default snapshot capacity (number of certificate numbers).
const DEFAULT_CAPACITY: u64 = 10_000;

/// Default time-to-live for snapshot entries (1 hour).
const DEFAULT_TTL_SECS: u64 = 3600;

/// Snapshot cache of public verification results.
///
/// Keyed by certificate number. Thread-safe and suitable for concurrent
/// access.
#[derive(Clone)]
pub struct VerificationSnapshot {
    cache: Cache<String, Arc<VerifiedCertificate>>,
}

impl VerificationSnapshot {
    /// Creates a snapshot with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a snapshot with custom capacity and TTL.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Mirrors a live lookup result.
    pub fn store(&self, certificate_number: &str, result: &VerifiedCertificate) {
        self.cache
            .insert(certificate_number.to_string(), Arc::new(result.clone()));
    }

    /// Returns the mirrored result for a number, if one is held.
    #[must_use]
    pub fn get(&self, certificate_number: &str) -> Option<Arc<VerifiedCertificate>> {
        self.cache.get(certificate_number)
    }
}

impl Default for VerificationSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(number: &str) -> VerifiedCertificate {
        VerifiedCertificate {
            status: "issued".to_string(),
            certificate_number: number.to_string(),
            type_name_en: Some("Citizenship Certificate".to_string()),
            type_name_bn: Some("নাগরিকত্ব সনদ".to_string()),
            issued_at: None,
            holder_name: Some("Rahim Uddin".to_string()),
            holder_nid: Some("1990123456789".to_string()),
        }
    }

    #[test]
    fn test_store_then_get() {
        let snapshot = VerificationSnapshot::new();
        let number = "19904172500000001";

        assert!(snapshot.get(number).is_none());
        snapshot.store(number, &sample(number));

        let hit = snapshot.get(number).expect("stored entry");
        assert_eq!(hit.status, "issued");
        assert_eq!(hit.certificate_number, number);
    }

    #[test]
    fn test_unknown_number_misses() {
        let snapshot = VerificationSnapshot::new();
        assert!(snapshot.get("00000000000000000").is_none());
    }
}
