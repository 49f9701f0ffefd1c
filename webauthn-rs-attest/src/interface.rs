//! Types produced by decoding a registration, and the results and configuration of verifying it.

use std::sync::Arc;
use std::time::Duration;

use openssl::x509;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use webauthn_rs_trust_store::{TrustAnchor, TrustCategory};

use crate::counter::AuthenticatorRecord;
use crate::error::DecodeError;

/// Representation of an AAGUID
/// <https://www.w3.org/TR/webauthn/#aaguid>
pub type Aaguid = [u8; 16];

/// A COSE signature algorithm identifier, as found in credential public keys and attestation
/// statements.
///
/// <https://www.iana.org/assignments/cose/cose.xhtml#algorithms>
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum COSEAlgorithm {
    /// ECDSA with SHA-256, usually on P-256
    ES256 = -7,
    /// ECDSA with SHA-384, usually on P-384
    ES384 = -35,
    /// ECDSA with SHA-512, usually on P-521
    ES512 = -36,
    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256 = -257,
    /// RSASSA-PKCS1-v1_5 with SHA-384
    RS384 = -258,
    /// RSASSA-PKCS1-v1_5 with SHA-512
    RS512 = -259,
    /// RSASSA-PSS with SHA-256
    PS256 = -37,
    /// RSASSA-PSS with SHA-384
    PS384 = -38,
    /// RSASSA-PSS with SHA-512
    PS512 = -39,
    /// EdDSA
    EDDSA = -8,
    /// RSASSA-PKCS1-v1_5 with SHA-1. Only accepted inside TPM attestation statements, since
    /// deployed Windows Hello TPMs still sign with it.
    INSECURE_RS1 = -65535,
}

impl TryFrom<i128> for COSEAlgorithm {
    type Error = DecodeError;

    fn try_from(i: i128) -> Result<Self, Self::Error> {
        match i {
            -7 => Ok(COSEAlgorithm::ES256),
            -35 => Ok(COSEAlgorithm::ES384),
            -36 => Ok(COSEAlgorithm::ES512),
            -257 => Ok(COSEAlgorithm::RS256),
            -258 => Ok(COSEAlgorithm::RS384),
            -259 => Ok(COSEAlgorithm::RS512),
            -37 => Ok(COSEAlgorithm::PS256),
            -38 => Ok(COSEAlgorithm::PS384),
            -39 => Ok(COSEAlgorithm::PS512),
            -8 => Ok(COSEAlgorithm::EDDSA),
            -65535 => Ok(COSEAlgorithm::INSECURE_RS1),
            _ => Err(DecodeError::COSEKeyInvalidAlgorithm),
        }
    }
}

/// An EDDSACurve identifier. You probably will never need to alter
/// or use this value, as it is set inside the credential for you.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EDDSACurve {
    // +---------+-------+----------+------------------------------------+
    // | Name    | Value | Key Type | Description                        |
    // +---------+-------+----------+------------------------------------+
    // | Ed25519 | 6     | OKP      | Ed25519 for use w/ EdDSA only      |
    // | Ed448   | 7     | OKP      | Ed448 for use w/ EdDSA only        |
    // +---------+-------+----------+------------------------------------+
    /// Identifies this OKP as ED25519
    ED25519 = 6,
    /// Identifies this OKP as ED448
    ED448 = 7,
}

impl EDDSACurve {
    /// Length in bytes of the public point.
    pub fn coordinate_size(self) -> usize {
        match self {
            EDDSACurve::ED25519 => 32,
            EDDSACurve::ED448 => 57,
        }
    }
}

impl TryFrom<i128> for EDDSACurve {
    type Error = DecodeError;

    fn try_from(i: i128) -> Result<Self, Self::Error> {
        match i {
            6 => Ok(EDDSACurve::ED25519),
            7 => Ok(EDDSACurve::ED448),
            _ => Err(DecodeError::COSEKeyEDDSAInvalidCurve),
        }
    }
}

/// An ECDSACurve identifier. You probably will never need to alter
/// or use this value, as it is set inside the credential for you.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ECDSACurve {
    // +---------+-------+----------+------------------------------------+
    // | Name    | Value | Key Type | Description                        |
    // +---------+-------+----------+------------------------------------+
    // | P-256   | 1     | EC2      | NIST P-256 also known as secp256r1 |
    // | P-384   | 2     | EC2      | NIST P-384 also known as secp384r1 |
    // | P-521   | 3     | EC2      | NIST P-521 also known as secp521r1 |
    // +---------+-------+----------+------------------------------------+
    /// Identifies this curve as SECP256R1 (X9_62_PRIME256V1 in OpenSSL)
    SECP256R1 = 1,
    /// Identifies this curve as SECP384R1
    SECP384R1 = 2,
    /// Identifies this curve as SECP521R1
    SECP521R1 = 3,
}

impl ECDSACurve {
    /// Length in bytes of each affine coordinate.
    pub fn coordinate_size(self) -> usize {
        match self {
            ECDSACurve::SECP256R1 => 32,
            ECDSACurve::SECP384R1 => 48,
            ECDSACurve::SECP521R1 => 66,
        }
    }
}

impl TryFrom<i128> for ECDSACurve {
    type Error = DecodeError;

    fn try_from(i: i128) -> Result<Self, Self::Error> {
        match i {
            1 => Ok(ECDSACurve::SECP256R1),
            2 => Ok(ECDSACurve::SECP384R1),
            3 => Ok(ECDSACurve::SECP521R1),
            _ => Err(DecodeError::COSEKeyECDSAInvalidCurve),
        }
    }
}

/// A COSE Elliptic Curve Public Key. This is generally the provided credential
/// that an authenticator registers, and is used to authenticate the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct COSEEC2Key {
    /// The curve that this key references.
    pub curve: ECDSACurve,
    /// The key's public X coordinate.
    pub x: Vec<u8>,
    /// The key's public Y coordinate.
    pub y: Vec<u8>,
}

/// A COSE Octet Key Pair public key, used for EdDSA credentials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct COSEOKPKey {
    /// The curve that this key references.
    pub curve: EDDSACurve,
    /// The key's public point.
    pub x: Vec<u8>,
}

/// A COSE RSA PublicKey. This is a provided credential from a registered
/// authenticator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct COSERSAKey {
    /// An RSA modulus
    pub n: Vec<u8>,
    /// An RSA exponent
    pub e: [u8; 3],
}

/// The type of Key contained within a COSE value. You should never need
/// to alter or change this type.
#[allow(non_camel_case_types)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum COSEKeyType {
    /// Identifies this as an Eliptic Curve octet key pair
    EC_OKP(COSEOKPKey),
    /// Identifies this as an Eliptic Curve EC2 key
    EC_EC2(COSEEC2Key),
    /// Identifies this as an RSA key
    RSA(COSERSAKey),
}

/// The numeric id of the COSEKeyType used in the CBOR fields.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i64)]
pub enum COSEKeyTypeId {
    /// Reserved
    EC_Reserved = 0,
    /// Octet Key Pair
    EC_OKP = 1,
    /// Elliptic Curve Keys w/ x- and y-coordinate
    EC_EC2 = 2,
    /// RSA
    EC_RSA = 3,
    /// Symmetric
    EC_Symmetric = 4,
}

/// A COSE Key as provided by the Authenticator. You should never need
/// to alter or change these values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct COSEKey {
    /// The type of key that this contains
    pub type_: COSEAlgorithm,
    /// The public key
    pub key: COSEKeyType,
}

/// The attestation statement format named by `fmt`. This is a closed set; an attestation object
/// naming any other format does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttestationFormat {
    /// Packed attestation
    Packed,
    /// TPM attestation (like Microsoft)
    Tpm,
    /// Android hardware attestation
    AndroidKey,
    /// Older Android Safety Net
    AndroidSafetyNet,
    /// Old U2F attestation type
    FIDOU2F,
    /// Apple touchID/faceID
    AppleAnonymous,
    /// No attestation
    None,
}

impl AttestationFormat {
    /// The `fmt` identifier of this format.
    pub fn as_str(self) -> &'static str {
        match self {
            AttestationFormat::Packed => "packed",
            AttestationFormat::Tpm => "tpm",
            AttestationFormat::AndroidKey => "android-key",
            AttestationFormat::AndroidSafetyNet => "android-safetynet",
            AttestationFormat::FIDOU2F => "fido-u2f",
            AttestationFormat::AppleAnonymous => "apple",
            AttestationFormat::None => "none",
        }
    }
}

impl TryFrom<&str> for AttestationFormat {
    type Error = DecodeError;

    fn try_from(a: &str) -> Result<AttestationFormat, Self::Error> {
        match a {
            "packed" => Ok(AttestationFormat::Packed),
            "tpm" => Ok(AttestationFormat::Tpm),
            "android-key" => Ok(AttestationFormat::AndroidKey),
            "android-safetynet" => Ok(AttestationFormat::AndroidSafetyNet),
            "fido-u2f" => Ok(AttestationFormat::FIDOU2F),
            "apple" => Ok(AttestationFormat::AppleAnonymous),
            "none" => Ok(AttestationFormat::None),
            _ => Err(DecodeError::UnknownFormat(a.to_string())),
        }
    }
}

impl std::fmt::Display for AttestationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fields of an attestation statement. Exactly one variant is populated, chosen by the
/// attestation object's format. Algorithms are kept as their raw COSE identifiers and
/// certificates as DER, since judging them is the verifier's job.
#[derive(Debug, Clone, PartialEq)]
pub enum AttestationStatement {
    /// <https://www.w3.org/TR/webauthn-3/#sctn-packed-attestation>
    Packed {
        /// The signature algorithm.
        alg: i128,
        /// The attestation signature.
        sig: Vec<u8>,
        /// The attestation certificate followed by its chain, if not self attested.
        x5c: Option<Vec<Vec<u8>>>,
        /// Present only for ECDAA attestation.
        ecdaa_key_id: Option<Vec<u8>>,
    },
    /// <https://www.w3.org/TR/webauthn-3/#sctn-tpm-attestation>
    Tpm {
        /// The TPM specification version, always "2.0".
        ver: String,
        /// The signature algorithm.
        alg: i128,
        /// The signature over `cert_info`.
        sig: Vec<u8>,
        /// The AIK certificate followed by its chain.
        x5c: Vec<Vec<u8>>,
        /// The TPMS_ATTEST structure that was signed.
        cert_info: Vec<u8>,
        /// The TPMT_PUBLIC structure of the credential key.
        pub_area: Vec<u8>,
    },
    /// <https://www.w3.org/TR/webauthn-3/#sctn-android-key-attestation>
    AndroidKey {
        /// The signature algorithm.
        alg: i128,
        /// The attestation signature.
        sig: Vec<u8>,
        /// The credential certificate followed by its chain.
        x5c: Vec<Vec<u8>>,
    },
    /// <https://www.w3.org/TR/webauthn-3/#sctn-android-safetynet-attestation>
    AndroidSafetyNet {
        /// The Google Play Services version that produced the response.
        ver: String,
        /// The compact JWS returned by the SafetyNet API.
        response: Vec<u8>,
    },
    /// <https://www.w3.org/TR/webauthn-3/#sctn-fido-u2f-attestation>
    FIDOU2F {
        /// The U2F registration signature.
        sig: Vec<u8>,
        /// The attestation certificate.
        x5c: Vec<Vec<u8>>,
    },
    /// <https://www.w3.org/TR/webauthn-3/#sctn-apple-anonymous-attestation>
    AppleAnonymous {
        /// The per-credential certificate followed by its chain.
        x5c: Vec<Vec<u8>>,
    },
    /// No attestation statement.
    None,
}

/// The flags byte of authenticator data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthenticatorFlags(pub u8);

impl AuthenticatorFlags {
    /// User Present (UP)
    pub const USER_PRESENT: u8 = 0x01;
    /// User Verified (UV)
    pub const USER_VERIFIED: u8 = 0x04;
    /// Backup Eligible (BE)
    pub const BACKUP_ELIGIBLE: u8 = 0x08;
    /// Backup State (BS)
    pub const BACKUP_STATE: u8 = 0x10;
    /// Attested credential data included (AT)
    pub const ATTESTED_CREDENTIAL_DATA: u8 = 0x40;
    /// Extension data included (ED)
    pub const EXTENSION_DATA: u8 = 0x80;

    fn has(self, bit: u8) -> bool {
        self.0 & bit == bit
    }

    /// The user was present.
    pub fn user_present(self) -> bool {
        self.has(Self::USER_PRESENT)
    }

    /// The user was verified.
    pub fn user_verified(self) -> bool {
        self.has(Self::USER_VERIFIED)
    }

    /// The credential may be backed up.
    pub fn backup_eligible(self) -> bool {
        self.has(Self::BACKUP_ELIGIBLE)
    }

    /// The credential is currently backed up.
    pub fn backup_state(self) -> bool {
        self.has(Self::BACKUP_STATE)
    }

    /// Attested credential data follows the counter.
    pub fn attested_credential_data(self) -> bool {
        self.has(Self::ATTESTED_CREDENTIAL_DATA)
    }

    /// Extension data follows the attested credential data.
    pub fn extension_data(self) -> bool {
        self.has(Self::EXTENSION_DATA)
    }
}

/// Attested Credential Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttestedCredentialData {
    /// The guid of the authenticator. May indicate manufacturer.
    pub aaguid: Aaguid,
    /// The credential ID.
    pub credential_id: Vec<u8>,
    /// The credentials public Key.
    pub credential_pk: COSEKey,
}

/// Data returned by this authenticator during registration.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatorData {
    /// Hash of the relying party id.
    pub rp_id_hash: [u8; 32],
    /// The authenticator flags.
    pub flags: AuthenticatorFlags,
    /// The counter of this credentials activations.
    pub counter: u32,
    /// The optional attestation.
    pub acd: Option<AttestedCredentialData>,
    /// Extensions supplied by the device, as the raw CBOR map.
    pub extensions: Option<serde_cbor_2::Value>,
}

/// A decoded `attestationObject`.
#[derive(Debug, Clone, PartialEq)]
pub struct AttestationObject {
    /// The attestation statement format.
    pub format: AttestationFormat,
    /// The parsed authenticator data.
    pub auth_data: AuthenticatorData,
    /// The authenticator data exactly as it was signed.
    pub auth_data_bytes: Vec<u8>,
    /// The format specific statement.
    pub att_stmt: AttestationStatement,
}

/// Size bounds applied while decoding untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeLimits {
    /// Largest accepted `attestationObject`, in bytes.
    pub max_attestation_object_len: usize,
    /// Largest accepted authenticator data, in bytes.
    pub max_auth_data_len: usize,
    /// Largest accepted credential id, in bytes.
    pub max_credential_id_len: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        DecodeLimits {
            max_attestation_object_len: 64 * 1024,
            max_auth_data_len: 64 * 1024,
            max_credential_id_len: 1023,
        }
    }
}

/// Options that adjust how attestation statements are verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttestationConfig {
    /// Limits used when decoding.
    pub limits: DecodeLimits,
    /// Skip certificate validity period checks when verifying chains, and SafetyNet timestamp
    /// checks. Only intended for tests against captured data.
    pub danger_disable_certificate_time_checks: bool,
    /// The oldest SafetyNet response that is accepted, if any limit applies.
    pub safetynet_max_age: Option<Duration>,
    /// Require SafetyNet responses to report `ctsProfileMatch`.
    pub require_safetynet_cts_profile_match: bool,
}

impl Default for AttestationConfig {
    fn default() -> Self {
        AttestationConfig {
            limits: DecodeLimits::default(),
            danger_disable_certificate_time_checks: false,
            safetynet_max_age: Some(Duration::from_secs(60)),
            require_safetynet_cts_profile_match: true,
        }
    }
}

/// The evidence an attestation was verified with.
#[derive(Debug, Clone)]
pub enum AttestationEvidence {
    /// No attestation was made.
    None,
    /// The credential key signed its own attestation.
    SelfKey(COSEKey),
    /// A certificate chain, leaf first.
    Chain(Vec<x509::X509>),
}

/// The result of a successful attestation verification.
#[derive(Debug, Clone)]
pub struct VerifiedAttestation {
    /// The statement format that was verified.
    pub format: AttestationFormat,
    /// How far this attestation may be trusted.
    pub category: TrustCategory,
    /// The certificate chain or key the statement was verified with.
    pub evidence: AttestationEvidence,
    /// The trust anchor the chain resolved to, if any.
    pub trust_anchor: Option<Arc<TrustAnchor>>,
    /// The authenticator model.
    pub aaguid: Uuid,
    /// The new credential's id.
    pub credential_id: Vec<u8>,
    /// The new credential's public key.
    pub credential: COSEKey,
    /// The signature counter reported at registration.
    pub counter: u32,
}

impl VerifiedAttestation {
    /// The initial clone detection state for the registered authenticator.
    pub fn authenticator_record(&self) -> AuthenticatorRecord {
        AuthenticatorRecord::new(self.aaguid, self.counter)
    }
}
