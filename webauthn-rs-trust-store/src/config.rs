use serde::{Deserialize, Serialize};

/// Validation rules applied to every entry as it is loaded into a [crate::TrustAnchorStore],
/// and to trust decisions made against those entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustStoreConfig {
    /// Drop entries keyed by the all-zero AAGUID.
    pub reject_zero_aaguid: bool,
    /// Require every entry to carry at least one root certificate, and treat a chain that does
    /// not verify against a matching entry as a hard failure rather than an unresolved anchor.
    pub validate_trust_anchor: bool,
    /// Drop entries whose status reports show the model as revoked or compromised, and reject
    /// attestations resolving to such an entry.
    pub enforce_status: bool,
}

impl Default for TrustStoreConfig {
    fn default() -> Self {
        TrustStoreConfig {
            reject_zero_aaguid: true,
            validate_trust_anchor: true,
            enforce_status: true,
        }
    }
}
