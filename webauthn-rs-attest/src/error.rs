//! Possible errors that may occur while decoding or verifying an attestation.

use thiserror::Error;
use webauthn_rs_trust_store::{AuthenticatorStatus, TrustCategory};

/// A malformed, truncated or oversized binary input. Decoding never makes trust judgements, so
/// every variant here is about structure only.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum DecodeError {
    #[error("Input of {len} bytes exceeds the limit of {limit} bytes")]
    TooLarge { len: usize, limit: usize },

    #[error("The CBOR structure could not be parsed")]
    ParseCBORFailure(#[from] serde_cbor_2::Error),

    #[error("A CBOR value had an unexpected type")]
    InvalidCBORValue,

    #[error("The attestation object is missing the required field {0}")]
    AttestationObjectFieldMissing(&'static str),

    #[error("The attestation format '{0}' is not recognised")]
    UnknownFormat(String),

    #[error("The attestation statement is missing the required field {0}")]
    AttestationStatementFieldMissing(&'static str),

    #[error("The attestation statement field {0} has an invalid type")]
    AttestationStatementFieldInvalid(&'static str),

    #[error("The none attestation statement must be empty")]
    AttestationStatementNotEmpty,

    #[error("The authenticator data is truncated or malformed")]
    AuthenticatorDataInvalid,

    #[error("The authenticator data has trailing bytes")]
    AuthenticatorDataTrailingBytes,

    #[error("The extension data flag does not agree with the presence of extension data")]
    ExtensionDataFlagMismatch,

    #[error("The credential id of {len} bytes exceeds the limit of {limit} bytes")]
    CredentialIdTooLong { len: usize, limit: usize },

    #[error("The COSE key has an unsupported key type")]
    COSEKeyInvalidType,

    #[error("The COSE key has an unsupported algorithm")]
    COSEKeyInvalidAlgorithm,

    #[error("The COSE key has an unsupported ECDSA curve")]
    COSEKeyECDSAInvalidCurve,

    #[error("The COSE key ECDSA coordinates have an invalid length")]
    COSEKeyECDSAXYInvalid,

    #[error("The COSE key RSA modulus or exponent is invalid")]
    COSEKeyRSANEInvalid,

    #[error("The COSE key has an unsupported EDDSA curve")]
    COSEKeyEDDSAInvalidCurve,

    #[error("The COSE key EDDSA point has an invalid length")]
    COSEKeyEDDSAXInvalid,

    #[error("The COSE key material was rejected by OpenSSL")]
    OpenSSL(#[from] openssl::error::ErrorStack),
}

/// A failure to verify an attestation statement, or a trust resolution that must not be
/// downgraded to a weaker category.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum VerificationError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("OpenSSL Error")]
    OpenSSL(#[from] openssl::error::ErrorStack),

    #[error("The authenticator data does not contain attested credential data")]
    MissingAttestedCredentialData,

    #[error("The signature algorithm {0} is not supported here")]
    UnsupportedAlgorithm(i128),

    #[error("The statement algorithm does not match the credential key")]
    AlgorithmMismatch,

    #[error("The attestation signature is invalid")]
    SignatureInvalid,

    #[error("The attestation statement has no certificate chain")]
    X5CMissing,

    #[error("The attestation certificate chain is malformed")]
    X5CInvalid,

    #[error("The attestation certificate does not meet the format requirements")]
    CertificateRequirementsNotMet,

    #[error("The attestation certificate key is not of the required type")]
    CertificatePublicKeyInvalid,

    #[error("The attestation certificate is missing a required extension")]
    MissingExtension,

    #[error("The attestation certificate extension could not be parsed")]
    ExtensionInvalid,

    #[error("The AAGUID of the attestation certificate does not match the authenticator data")]
    AaguidMismatch,

    #[error("The attestation certificate nonce does not match")]
    NonceMismatch,

    #[error("The attestation challenge does not match the client data hash")]
    ChallengeMismatch,

    #[error("The credential public key does not match the attestation certificate key")]
    CredentialSubjectKeyMismatch,

    #[error("ECDAA attestation is not supported")]
    EcdaaNotSupported,

    #[error("The TPM statement version is not supported")]
    TpmVersionUnsupported,

    #[error("The TPM structure is malformed")]
    TpmStructureInvalid,

    #[error("The TPM certify info is not of type TPM_ST_ATTEST_CERTIFY")]
    TpmStInvalid,

    #[error("The TPM public area does not match the credential public key")]
    TpmPubAreaMismatch,

    #[error("The TPM extra data does not match the hash of the signed data")]
    TpmExtraDataMismatch,

    #[error("The TPM name does not match the public area")]
    TpmNameMismatch,

    #[error("The TPM name algorithm is not supported")]
    TpmNameAlgUnsupported,

    #[error("The SafetyNet response is invalid")]
    SafetyNetResponseInvalid,

    #[error("The attestation chain does not verify to the trust anchor: {0}")]
    AttestationChainNotTrusted(String),

    #[error("The trust anchor does not permit attestation type {0}")]
    AttestationTypeNotPermitted(TrustCategory),

    #[error("The authenticator model has been revoked: {0:?}")]
    AuthenticatorRevoked(AuthenticatorStatus),
}
