//! Possible errors that may occur while loading or persisting trust anchors.

use thiserror::Error;

use crate::entry::AuthenticatorStatus;

/// Errors raised by the trust anchor store. None of these are ever surfaced as an attestation
/// verification failure; a store that can not read its cache is simply empty.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum TrustStoreError {
    #[error("The cache file could not be read or written")]
    CacheIo(#[from] std::io::Error),

    #[error("The cache payload could not be serialised or deserialised")]
    Serde(#[from] serde_json::Error),

    #[error("All {dropped} metadata entries were rejected")]
    AllEntriesInvalid { dropped: usize },

    #[error("OpenSSL Error")]
    OpenSSL(#[from] openssl::error::ErrorStack),
}

/// The reason a single metadata entry was dropped during a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRejection {
    /// The entry is keyed by the all-zero AAGUID, which is not a model identifier.
    ZeroAaguid,
    /// The newest effective status report for this entry indicates it must not be trusted.
    Revoked(AuthenticatorStatus),
    /// One of the root certificates is not valid DER.
    CertificateInvalid,
    /// The entry carries no root certificates to anchor a chain to.
    NoTrustAnchor,
}

impl std::fmt::Display for EntryRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EntryRejection::ZeroAaguid => write!(f, "zero aaguid"),
            EntryRejection::Revoked(status) => write!(f, "revoked ({status:?})"),
            EntryRejection::CertificateInvalid => write!(f, "invalid root certificate"),
            EntryRejection::NoTrustAnchor => write!(f, "no root certificates"),
        }
    }
}
