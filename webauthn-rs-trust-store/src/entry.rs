//! Metadata entries describing how far an authenticator model may be trusted.

use std::collections::BTreeSet;
use std::str::FromStr;

use base64urlsafedata::Base64UrlSafeData;
use chrono::NaiveDate;
use openssl::x509;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EntryRejection;

/// The trust category an attestation was classified into by a format verifier.
///
/// <https://www.w3.org/TR/webauthn-3/#sctn-attestation-types>
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrustCategory {
    /// No attestation was provided.
    #[serde(rename = "none")]
    None,
    /// The credential signed its own attestation.
    #[serde(rename = "self")]
    Self_,
    /// Signed by a batch attestation key that chains to a known trust anchor.
    #[serde(rename = "basic_full")]
    BasicFull,
    /// Signed by an attestation certificate which could not be tied to any known trust anchor.
    #[serde(rename = "basic_surrogate")]
    BasicSurrogate,
    /// Signed by a key certified by an attestation CA, such as a TPM privacy CA.
    #[serde(rename = "attca")]
    AttCa,
    /// Signed by a per-credential certificate from an anonymization CA.
    #[serde(rename = "anonca")]
    AnonCa,
    /// Signed by a dedicated attestation key.
    #[serde(rename = "attestation_key")]
    AttestationKey,
}

impl std::fmt::Display for TrustCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            TrustCategory::None => "None",
            TrustCategory::Self_ => "Self",
            TrustCategory::BasicFull => "Basic-Full",
            TrustCategory::BasicSurrogate => "Basic-Surrogate",
            TrustCategory::AttCa => "AttCA",
            TrustCategory::AnonCa => "AnonCA",
            TrustCategory::AttestationKey => "Attestation-Key",
        };
        f.write_str(s)
    }
}

/// How a trust anchor entry is found.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrustAnchorIdentifier {
    /// The authenticator model's AAGUID.
    Aaguid(Uuid),
    /// The subject key identifier of an attestation certificate, for authenticators such as
    /// U2F devices which report a zero AAGUID.
    SubjectKeyIdentifier(Vec<u8>),
}

impl TrustAnchorIdentifier {
    /// True if this identifier is the all zero AAGUID.
    pub fn is_zero_aaguid(&self) -> bool {
        matches!(self, TrustAnchorIdentifier::Aaguid(u) if u.is_nil())
    }
}

impl std::fmt::Display for TrustAnchorIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TrustAnchorIdentifier::Aaguid(u) => write!(f, "aaguid:{u}"),
            TrustAnchorIdentifier::SubjectKeyIdentifier(ski) => {
                write!(f, "ski:{}", Base64UrlSafeData(ski.clone()))
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SerialisableIdentifier {
    Aaguid(Uuid),
    SubjectKeyIdentifier(Base64UrlSafeData),
}

impl Serialize for TrustAnchorIdentifier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TrustAnchorIdentifier::Aaguid(u) => SerialisableIdentifier::Aaguid(*u),
            TrustAnchorIdentifier::SubjectKeyIdentifier(ski) => {
                SerialisableIdentifier::SubjectKeyIdentifier(Base64UrlSafeData(ski.clone()))
            }
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TrustAnchorIdentifier {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match SerialisableIdentifier::deserialize(deserializer)? {
            SerialisableIdentifier::Aaguid(u) => TrustAnchorIdentifier::Aaguid(u),
            SerialisableIdentifier::SubjectKeyIdentifier(ski) => {
                TrustAnchorIdentifier::SubjectKeyIdentifier(ski.0)
            }
        })
    }
}

/// The fido certification status of the device associated to this aaid/aaguid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthenticatorStatus {
    /// The device is NOT fido certified
    #[serde(rename = "NOT_FIDO_CERTIFIED")]
    NotFidoCertified,
    /// The device is fido certified.
    #[serde(rename = "FIDO_CERTIFIED")]
    FidoCertified,
    /// Malware is able to bypass the user verification of this device.
    #[serde(rename = "USER_VERIFICATION_BYPASS")]
    UserVerificationBypass,
    /// An attestation key for this authenticator is known to be compromised.
    #[serde(rename = "ATTESTATION_KEY_COMPROMISE")]
    AttestationKeyCompromise,
    /// Registered keys of this authenticator can be compromised remotely.
    #[serde(rename = "USER_KEY_REMOTE_COMPROMISE")]
    UserKeyRemoteCompromise,
    /// Registered keys can be extracted by an adversary in physical possession of the device.
    #[serde(rename = "USER_KEY_PHYSICAL_COMPROMISE")]
    UserKeyPhysicalCompromise,
    /// A software or firmware update is available for the device.
    #[serde(rename = "UPDATE_AVAILABLE")]
    UpdateAvailable,
    /// The FIDO Alliance has determined that this authenticator should not be trusted for any
    /// reason.
    #[serde(rename = "REVOKED")]
    Revoked,
    /// The vendor has submitted the self-certification checklist.
    #[serde(rename = "SELF_ASSERTION_SUBMITTED")]
    SelfAssertionSubmitted,
    /// This device is certified at level 1
    #[serde(rename = "FIDO_CERTIFIED_L1")]
    FidoCertifiedL1,
    /// This device is certified at level 1 plus
    #[serde(rename = "FIDO_CERTIFIED_L1plus")]
    FidoCertifiedL1Plus,
    /// This device is certified at level 2
    #[serde(rename = "FIDO_CERTIFIED_L2")]
    FidoCertifiedL2,
    /// This device is certified at level 2 plus
    #[serde(rename = "FIDO_CERTIFIED_L2plus")]
    FidoCertifiedL2Plus,
    /// This device is certified at level 3
    #[serde(rename = "FIDO_CERTIFIED_L3")]
    FidoCertifiedL3,
    /// This device is certified at level 3 plus
    #[serde(rename = "FIDO_CERTIFIED_L3plus")]
    FidoCertifiedL3Plus,
}

impl AuthenticatorStatus {
    /// True if a device in this state must not be accepted for new registrations.
    pub fn is_revocation(self) -> bool {
        matches!(
            self,
            AuthenticatorStatus::Revoked
                | AuthenticatorStatus::UserVerificationBypass
                | AuthenticatorStatus::AttestationKeyCompromise
                | AuthenticatorStatus::UserKeyRemoteCompromise
                | AuthenticatorStatus::UserKeyPhysicalCompromise
        )
    }
}

impl FromStr for AuthenticatorStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not-certified" => Ok(AuthenticatorStatus::NotFidoCertified),
            "certified" => Ok(AuthenticatorStatus::FidoCertified),
            "uv-bypass" => Ok(AuthenticatorStatus::UserVerificationBypass),
            "key-compromise" => Ok(AuthenticatorStatus::AttestationKeyCompromise),
            "remote-exploit" => Ok(AuthenticatorStatus::UserKeyRemoteCompromise),
            "physical-compromise" => Ok(AuthenticatorStatus::UserKeyPhysicalCompromise),
            "update-available" => Ok(AuthenticatorStatus::UpdateAvailable),
            "revoked" => Ok(AuthenticatorStatus::Revoked),
            "self-asserted" => Ok(AuthenticatorStatus::SelfAssertionSubmitted),
            "l1" => Ok(AuthenticatorStatus::FidoCertifiedL1),
            "l1+" => Ok(AuthenticatorStatus::FidoCertifiedL1Plus),
            "l2" => Ok(AuthenticatorStatus::FidoCertifiedL2),
            "l2+" => Ok(AuthenticatorStatus::FidoCertifiedL2Plus),
            "l3" => Ok(AuthenticatorStatus::FidoCertifiedL3),
            "l3+" => Ok(AuthenticatorStatus::FidoCertifiedL3Plus),
            _ => Err(()),
        }
    }
}

/// A single dated status report about an authenticator model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    /// The status of the authenticator.
    pub status: AuthenticatorStatus,
    /// The date from which this status applies. If no date is given, the status is assumed to
    /// be effective while present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
}

impl StatusReport {
    /// Create a status report effective from `effective_date`.
    pub fn new(status: AuthenticatorStatus, effective_date: Option<NaiveDate>) -> Self {
        StatusReport {
            status,
            effective_date,
        }
    }

    fn is_effective_at(&self, today: NaiveDate) -> bool {
        self.effective_date.map(|d| d <= today).unwrap_or(true)
    }
}

/// A metadata record for one authenticator model, as supplied by a metadata collaborator and
/// as written to the cache file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustAnchorEntry {
    /// How this entry is looked up.
    pub identifier: TrustAnchorIdentifier,
    /// The DER encoded root certificates an attestation chain for this model must verify to.
    pub root_certificates: Vec<Base64UrlSafeData>,
    /// Status reports, oldest first.
    #[serde(default)]
    pub status_reports: Vec<StatusReport>,
    /// If not empty, the set of trust categories this model may be attested as. A category
    /// outside this set is a verification failure.
    #[serde(default)]
    pub permitted_attestation_types: BTreeSet<TrustCategory>,
}

impl TrustAnchorEntry {
    /// Create a new entry for `identifier` anchored to a set of DER root certificates.
    pub fn new(identifier: TrustAnchorIdentifier, root_certificates: Vec<Vec<u8>>) -> Self {
        TrustAnchorEntry {
            identifier,
            root_certificates: root_certificates.into_iter().map(Base64UrlSafeData).collect(),
            status_reports: Vec::new(),
            permitted_attestation_types: BTreeSet::new(),
        }
    }

    /// Create a new entry from already parsed root certificates.
    pub fn from_x509(
        identifier: TrustAnchorIdentifier,
        roots: &[x509::X509],
    ) -> Result<Self, openssl::error::ErrorStack> {
        let ders = roots
            .iter()
            .map(|crt| crt.to_der())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(identifier, ders))
    }

    /// Append a status report.
    pub fn with_status_report(mut self, report: StatusReport) -> Self {
        self.status_reports.push(report);
        self
    }

    /// Restrict the trust categories this entry may be attested as.
    pub fn with_permitted_attestation_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = TrustCategory>,
    {
        self.permitted_attestation_types = types.into_iter().collect();
        self
    }

    /// The newest status report that is in effect on `today`. Reports without a date are
    /// always in effect, but any dated report in effect supersedes them.
    pub fn effective_status_at(&self, today: NaiveDate) -> Option<&StatusReport> {
        self.status_reports
            .iter()
            .filter(|r| r.is_effective_at(today))
            .max_by_key(|r| r.effective_date)
    }

    /// If the effective status as of `today` revokes this model, return that status.
    pub fn revocation_at(&self, today: NaiveDate) -> Option<AuthenticatorStatus> {
        self.effective_status_at(today)
            .map(|r| r.status)
            .filter(|s| s.is_revocation())
    }
}

/// A validated entry with its root certificates parsed, as held by the store.
#[derive(Debug)]
pub struct TrustAnchor {
    entry: TrustAnchorEntry,
    roots: Vec<x509::X509>,
}

impl TrustAnchor {
    pub(crate) fn parse(entry: TrustAnchorEntry) -> Result<Self, (TrustAnchorEntry, EntryRejection)> {
        let roots: Result<Vec<_>, _> = entry
            .root_certificates
            .iter()
            .map(|der| x509::X509::from_der(der.0.as_slice()))
            .collect();

        match roots {
            Ok(roots) => Ok(TrustAnchor { entry, roots }),
            Err(e) => {
                debug!(?e, "unable to parse root certificate");
                Err((entry, EntryRejection::CertificateInvalid))
            }
        }
    }

    /// The identifier this anchor was stored under.
    pub fn identifier(&self) -> &TrustAnchorIdentifier {
        &self.entry.identifier
    }

    /// The metadata record this anchor was built from.
    pub fn entry(&self) -> &TrustAnchorEntry {
        &self.entry
    }

    /// The parsed root certificates.
    pub fn root_certificates(&self) -> &[x509::X509] {
        &self.roots
    }

    /// True if `category` is allowed by this entry. An empty permitted set allows any category.
    pub fn permits(&self, category: TrustCategory) -> bool {
        self.entry.permitted_attestation_types.is_empty()
            || self.entry.permitted_attestation_types.contains(&category)
    }

    /// If the effective status as of `today` revokes this model, return that status.
    pub fn revocation_at(&self, today: NaiveDate) -> Option<AuthenticatorStatus> {
        self.entry.revocation_at(today)
    }
}
