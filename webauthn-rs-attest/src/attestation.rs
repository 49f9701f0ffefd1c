//! Attestation statement verification procedures, one per format, and the certificate
//! chain check used when resolving a statement against a trust anchor.

use std::convert::TryFrom;

use base64urlsafedata::Base64UrlSafeData;
use chrono::{DateTime, Utc};
use openssl::{stack, x509};
use webauthn_rs_trust_store::TrustCategory;
use x509_parser::oid_registry::Oid;

use crate::crypto::{
    assert_packed_attest_req, assert_tpm_attest_req, compute_sha256, is_secp256r1,
    only_hash_from_type, verify_signature,
};
use crate::error::VerificationError;
use crate::interface::*;
use crate::tpm::{
    Tpm2bName, TpmSt, TpmiEccCurve, TpmsAttest, TpmtPublic, TpmuAttest, TpmuPublicId,
    TpmuPublicParms,
};

/// x509 certificate extensions are validated by checking that the value of the extension is
/// equal to some other value.
pub(crate) trait AttestationX509Extension {
    /// the type of the value in the certificate extension
    type Output: Eq;

    /// the oid of the extension
    const OID: Oid<'static>;

    /// how to parse the value out of the certificate extension
    fn parse(i: &[u8]) -> der_parser::error::BerResult<Self::Output>;

    /// if `true`, then validating this certificate fails if this extension is missing
    const IS_REQUIRED: bool;

    /// what error to return if the value in the extension differs
    const VALIDATION_ERROR: VerificationError;
}

pub(crate) struct FidoGenCeAaguid;
pub(crate) struct AppleAnonymousNonce;
pub(crate) struct AndroidKeyAttestationExtensionData;

impl AttestationX509Extension for FidoGenCeAaguid {
    // If cert contains an extension with OID 1 3 6 1 4 1 45724 1 1 4 (id-fido-gen-ce-aaguid)
    const OID: Oid<'static> = der_parser::oid!(1.3.6 .1 .4 .1 .45724 .1 .1 .4);

    // verify that the value of this extension matches the aaguid in authenticatorData.
    type Output = Aaguid;

    fn parse(i: &[u8]) -> der_parser::error::BerResult<Self::Output> {
        let (rem, aaguid) = der_parser::der::parse_der_octetstring(i)?;
        let aaguid: Aaguid = aaguid
            .as_slice()?
            .try_into()
            .map_err(|_| der_parser::error::BerError::InvalidLength)?;

        Ok((rem, aaguid))
    }

    const IS_REQUIRED: bool = false;

    const VALIDATION_ERROR: VerificationError = VerificationError::AaguidMismatch;
}

impl AttestationX509Extension for AppleAnonymousNonce {
    type Output = [u8; 32];

    // Apple's anonymous attestation nonce, SEQUENCE { [1] EXPLICIT OCTET STRING }
    const OID: Oid<'static> = der_parser::oid!(1.2.840 .113635 .100 .8 .2);

    fn parse(i: &[u8]) -> der_parser::error::BerResult<Self::Output> {
        use der_parser::{der::*, error::BerError};
        parse_der_container(|i: &[u8], hdr: Header| {
            if hdr.tag() != Tag::Sequence {
                return Err(nom::Err::Error(BerError::BerTypeError));
            }
            let (i, tagged_nonce) = parse_der_tagged_explicit(1, parse_der_octetstring)(i)?;
            let (class, _tag, nonce) = tagged_nonce.as_tagged()?;
            if class != Class::ContextSpecific {
                return Err(nom::Err::Error(BerError::BerTypeError));
            }
            let nonce = nonce
                .as_slice()?
                .try_into()
                .map_err(|_| BerError::InvalidLength)?;
            Ok((i, nonce))
        })(i)
    }

    const IS_REQUIRED: bool = true;

    const VALIDATION_ERROR: VerificationError = VerificationError::NonceMismatch;
}

impl AttestationX509Extension for AndroidKeyAttestationExtensionData {
    // Android key attestation KeyDescription
    const OID: Oid<'static> = der_parser::oid!(1.3.6 .1 .4 .1 .11129 .2 .1 .17);

    // The attestation challenge, compared to the client data hash.
    type Output = Vec<u8>;

    fn parse(i: &[u8]) -> der_parser::error::BerResult<Self::Output> {
        android_key_attestation::parse_key_description(i)
    }

    const IS_REQUIRED: bool = true;

    const VALIDATION_ERROR: VerificationError = VerificationError::ChallengeMismatch;
}

pub(crate) mod android_key_attestation {
    //! <https://source.android.com/docs/security/features/keystore/attestation#schema>

    use der_parser::ber::BerObjectContent;
    use der_parser::{der::*, error::BerError};

    pub const KM_ORIGIN_GENERATED: u32 = 0;
    pub const KM_PURPOSE_SIGN: u32 = 2;

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct AuthorizationList {
        pub all_applications: bool,
        pub origin: Option<u32>,
        pub purpose: Vec<u32>,
    }

    impl AuthorizationList {
        pub fn parse(i: &[u8]) -> der_parser::error::BerResult<Self> {
            parse_der_container(|i: &[u8], hdr: Header| {
                if hdr.tag() != Tag::Sequence {
                    return Err(nom::Err::Error(BerError::BerTypeError));
                }

                let mut al = AuthorizationList::default();

                let mut i = i;
                while let Ok((k, obj)) = parse_der(i) {
                    i = k;
                    if obj.content == BerObjectContent::Optional(None) {
                        continue;
                    }

                    match obj.tag() {
                        Tag(600) => {
                            al.all_applications = true;
                        }
                        Tag(702) => {
                            if let BerObjectContent::Unknown(o) = obj.content {
                                let (_, val) = parse_der_integer(o.data)?;
                                al.origin = Some(val.as_u32()?);
                            }
                        }
                        Tag(1) => {
                            // purpose [1] EXPLICIT SET OF INTEGER
                            if let BerObjectContent::Unknown(o) = obj.content {
                                let (_, set) = parse_der_set_of(parse_der_integer)(o.data)?;
                                for v in set.as_set()? {
                                    al.purpose.push(v.as_u32()?);
                                }
                            }
                        }
                        _ => continue,
                    };
                }

                Ok((i, al))
            })(i)
        }

        /// A list that says nothing about origin and purpose is acceptable, one that says
        /// something must say the key was generated on device for signing.
        fn is_generated_for_signing(&self) -> Result<bool, BerError> {
            match (self.origin, self.purpose.is_empty()) {
                (None, true) => Ok(false),
                (Some(origin), false)
                    if origin == KM_ORIGIN_GENERATED
                        && self.purpose.contains(&KM_PURPOSE_SIGN) =>
                {
                    Ok(true)
                }
                _ => Err(BerError::InvalidValue {
                    tag: Tag(702),
                    msg: "invalid key master values".to_string(),
                }),
            }
        }
    }

    fn security_level(v: u32) -> Result<&'static str, BerError> {
        match v {
            0 => Ok("software"),
            1 => Ok("tee"),
            2 => Ok("strongbox"),
            _ => Err(BerError::InvalidTag),
        }
    }

    /// Parse a KeyDescription, enforce the authorization list requirements and return the
    /// attestation challenge.
    pub fn parse_key_description(i: &[u8]) -> der_parser::error::BerResult<Vec<u8>> {
        parse_der_container(|i: &[u8], hdr: Header| {
            if hdr.tag() != Tag::Sequence {
                return Err(nom::Err::Error(BerError::BerTypeError));
            }
            let (i, attestation_version) = parse_der_integer(i)?;
            let attestation_version = attestation_version.as_i64()?;

            let (i, attest_sec_level) = parse_der_enum(i)?;
            let attest_sec_level = security_level(attest_sec_level.as_u32()?)?;
            let (i, _) = parse_der_integer(i)?; // keymasterVersion
            let (i, km_sec_level) = parse_der_enum(i)?;
            let km_sec_level = security_level(km_sec_level.as_u32()?)?;

            let (i, attestation_challenge) = parse_der_octetstring(i)?;
            let attestation_challenge = attestation_challenge.as_slice()?.to_vec();

            let (i, _unique_id) = parse_der_octetstring(i)?;

            let (i, software_enforced) = AuthorizationList::parse(i)?;
            let (i, tee_enforced) = AuthorizationList::parse(i)?;

            debug!(
                attestation_version,
                attest_sec_level, km_sec_level, "android key description"
            );

            // The credential must be scoped to the RP id.
            if software_enforced.all_applications || tee_enforced.all_applications {
                return Err(nom::Err::Error(BerError::InvalidValue {
                    tag: Tag(600),
                    msg: "all_applications must not be set".to_string(),
                }));
            }

            let software_set = software_enforced.is_generated_for_signing()?;
            let tee_set = tee_enforced.is_generated_for_signing()?;

            if !tee_set && !software_set {
                return Err(nom::Err::Error(BerError::InvalidValue {
                    tag: Tag(702),
                    msg: "neither software nor tee list sets origin and purpose".to_string(),
                }));
            }

            Ok((i, attestation_challenge))
        })(i)
    }
}

/// Validate an x509 extension in a certificate against an expected value.
pub(crate) fn validate_extension<T>(
    x509: &x509::X509Ref,
    data: &<T as AttestationX509Extension>::Output,
) -> Result<(), VerificationError>
where
    T: AttestationX509Extension,
{
    let der_bytes = x509.to_der()?;
    x509_parser::parse_x509_certificate(&der_bytes)
        .map_err(|_| VerificationError::X5CInvalid)?
        .1
        .extensions()
        .iter()
        .find_map(|extension| {
            (extension.oid == T::OID).then(|| {
                T::parse(extension.value)
                    .map_err(|e| {
                        debug!(?e, oid = %T::OID, "extension parse");
                        VerificationError::ExtensionInvalid
                    })
                    .and_then(|(_, output)| {
                        if &output == data {
                            Ok(())
                        } else {
                            Err(T::VALIDATION_ERROR)
                        }
                    })
            })
        })
        .unwrap_or({
            if T::IS_REQUIRED {
                Err(VerificationError::MissingExtension)
            } else {
                Ok(())
            }
        })
}

/// The algorithm of a statement. SHA-1 is only acceptable from a TPM.
fn statement_alg(alg: i128, allow_sha1: bool) -> Result<COSEAlgorithm, VerificationError> {
    match COSEAlgorithm::try_from(alg) {
        Ok(COSEAlgorithm::INSECURE_RS1) if !allow_sha1 => {
            Err(VerificationError::UnsupportedAlgorithm(alg))
        }
        Ok(alg) => Ok(alg),
        Err(_) => Err(VerificationError::UnsupportedAlgorithm(alg)),
    }
}

fn parse_x5c(x5c: &[Vec<u8>]) -> Result<Vec<x509::X509>, VerificationError> {
    if x5c.is_empty() {
        return Err(VerificationError::X5CMissing);
    }
    x5c.iter()
        .map(|der| {
            x509::X509::from_der(der).map_err(|e| {
                debug!(?e, "x5c certificate");
                VerificationError::X5CInvalid
            })
        })
        .collect()
}

fn signed_data(att_obj: &AttestationObject, client_data_hash: &[u8]) -> Vec<u8> {
    att_obj
        .auth_data_bytes
        .iter()
        .chain(client_data_hash.iter())
        .copied()
        .collect()
}

/// The result of a format verifier: the category the statement claims before any trust
/// anchor has been consulted, and what it was verified with.
pub(crate) type FormatResult = Result<(TrustCategory, AttestationEvidence), VerificationError>;

// https://www.w3.org/TR/webauthn-3/#sctn-packed-attestation
pub(crate) fn verify_packed_attestation(
    acd: &AttestedCredentialData,
    att_obj: &AttestationObject,
    client_data_hash: &[u8],
    alg: i128,
    sig: &[u8],
    x5c: Option<&[Vec<u8>]>,
    ecdaa_key_id: Option<&[u8]>,
) -> FormatResult {
    let alg = statement_alg(alg, false)?;
    let verification_data = signed_data(att_obj, client_data_hash);

    match (x5c, ecdaa_key_id) {
        (Some(x5c), _) => {
            // x5c: [ attestnCert: bytes, * (caCert: bytes) ]
            let arr_x509 = parse_x5c(x5c)?;
            let attestn_cert = arr_x509.first().ok_or(VerificationError::X5CMissing)?;

            // Verify that sig is a valid signature over the concatenation of authenticatorData
            // and clientDataHash using the attestation public key in attestnCert with the
            // algorithm specified in alg.
            if !verify_signature(alg, attestn_cert, sig, &verification_data)? {
                debug!("packed x509 signature invalid");
                return Err(VerificationError::SignatureInvalid);
            }

            assert_packed_attest_req(attestn_cert)?;

            // If attestnCert contains an extension with OID 1.3.6.1.4.1.45724.1.1.4
            // (id-fido-gen-ce-aaguid) verify that the value of this extension matches the aaguid
            // in authenticatorData.
            validate_extension::<FidoGenCeAaguid>(attestn_cert, &acd.aaguid)?;

            Ok((TrustCategory::BasicFull, AttestationEvidence::Chain(arr_x509)))
        }
        (None, Some(_ecdaa_key_id)) => {
            debug!("ecdaa attestation requested");
            Err(VerificationError::EcdaaNotSupported)
        }
        (None, None) => {
            // Self attestation: the credential key signs over its own registration.
            let credential_public_key = &acd.credential_pk;

            // Validate that alg matches the algorithm of the credentialPublicKey in authenticatorData.
            if alg != credential_public_key.type_ {
                debug!(?alg, credential = ?credential_public_key.type_, "self attestation alg");
                return Err(VerificationError::AlgorithmMismatch);
            }

            if !credential_public_key.verify_signature(sig, &verification_data)? {
                debug!("invalid self attestation signature");
                return Err(VerificationError::SignatureInvalid);
            }

            Ok((
                TrustCategory::Self_,
                AttestationEvidence::SelfKey(credential_public_key.clone()),
            ))
        }
    }
}

// https://www.w3.org/TR/webauthn-3/#sctn-fido-u2f-attestation
pub(crate) fn verify_fidou2f_attestation(
    acd: &AttestedCredentialData,
    att_obj: &AttestationObject,
    client_data_hash: &[u8],
    sig: &[u8],
    x5c: &[Vec<u8>],
) -> FormatResult {
    // Check that x5c has exactly one element and let att_cert be that element.
    let arr_x509 = parse_x5c(x5c)?;
    if arr_x509.len() != 1 {
        debug!(len = arr_x509.len(), "u2f x5c must hold one certificate");
        return Err(VerificationError::X5CInvalid);
    }
    let att_cert = arr_x509.first().ok_or(VerificationError::X5CMissing)?;

    // If certificate public key is not an Elliptic Curve (EC) public key over the P-256 curve,
    // terminate this algorithm and return an appropriate error.
    if !is_secp256r1(att_cert)? {
        return Err(VerificationError::CertificatePublicKeyInvalid);
    }

    let public_key_u2f = acd.credential_pk.get_alg_key_ecc_x962_raw()?;

    // verificationData = 0x00 || rpIdHash || clientDataHash || credentialId || publicKeyU2F
    let r: [u8; 1] = [0x00];
    let verification_data: Vec<u8> = r
        .iter()
        .chain(att_obj.auth_data.rp_id_hash.iter())
        .chain(client_data_hash.iter())
        .chain(acd.credential_id.iter())
        .chain(public_key_u2f.iter())
        .copied()
        .collect();

    if !verify_signature(COSEAlgorithm::ES256, att_cert, sig, &verification_data)? {
        debug!("u2f signature invalid");
        return Err(VerificationError::SignatureInvalid);
    }

    Ok((TrustCategory::BasicFull, AttestationEvidence::Chain(arr_x509)))
}

fn tpm_pub_area_matches(credential: &COSEKey, pubarea: &TpmtPublic) -> bool {
    match (&credential.key, &pubarea.parameters, &pubarea.unique) {
        (
            COSEKeyType::RSA(cose_rsa),
            TpmuPublicParms::Rsa(tpm_parms),
            TpmuPublicId::Rsa(tpm_modulus),
        ) => {
            let exponent = u32::from_be_bytes([0, cose_rsa.e[0], cose_rsa.e[1], cose_rsa.e[2]]);
            tpm_modulus.len() * 8 == usize::from(tpm_parms.key_bits)
                && cose_rsa.n == *tpm_modulus
                && tpm_parms.effective_exponent() == exponent
        }
        (
            COSEKeyType::EC_EC2(COSEEC2Key { curve, x, y }),
            TpmuPublicParms::Ecc(ecc_parms),
            TpmuPublicId::Ecc(ecc_points),
        ) => {
            let curve_matches = matches!(
                (curve, ecc_parms.curve_id),
                (ECDSACurve::SECP256R1, TpmiEccCurve::NistP256)
                    | (ECDSACurve::SECP384R1, TpmiEccCurve::NistP384)
                    | (ECDSACurve::SECP521R1, TpmiEccCurve::NistP521)
            );
            curve_matches && *x == ecc_points.x && *y == ecc_points.y
        }
        ex => {
            debug!(?ex, "unrecognised credential and pubArea combination");
            false
        }
    }
}

// https://www.w3.org/TR/webauthn-3/#sctn-tpm-attestation
#[allow(clippy::too_many_arguments)]
pub(crate) fn verify_tpm_attestation(
    acd: &AttestedCredentialData,
    att_obj: &AttestationObject,
    client_data_hash: &[u8],
    ver: &str,
    alg: i128,
    sig: &[u8],
    x5c: &[Vec<u8>],
    cert_info: &[u8],
    pub_area: &[u8],
) -> FormatResult {
    debug!("begin verify_tpm_attest");

    if ver != "2.0" {
        debug!(%ver, "tpm version");
        return Err(VerificationError::TpmVersionUnsupported);
    }

    let alg = statement_alg(alg, true)?;
    let certinfo = TpmsAttest::try_from(cert_info)?;
    let pubarea = TpmtPublic::try_from(pub_area)?;

    let arr_x509 = parse_x5c(x5c)?;
    let aik_cert = arr_x509.first().ok_or(VerificationError::X5CMissing)?;

    // Verify that the public key specified by the parameters and unique fields of pubArea is
    // identical to the credentialPublicKey in the attestedCredentialData in authenticatorData.
    if !tpm_pub_area_matches(&acd.credential_pk, &pubarea) {
        return Err(VerificationError::TpmPubAreaMismatch);
    }

    // Magic is checked during parsing.
    if certinfo.type_ != TpmSt::AttestCertify {
        debug!(type_ = ?certinfo.type_, "tpm attestation type");
        return Err(VerificationError::TpmStInvalid);
    }

    // Verify that extraData is set to the hash of attToBeSigned using the hash algorithm
    // employed in "alg".
    let verification_data = signed_data(att_obj, client_data_hash);
    let hash_verification_data = only_hash_from_type(alg, &verification_data)?;

    if hash_verification_data != certinfo.extra_data {
        return Err(VerificationError::TpmExtraDataMismatch);
    }

    // Verify that attested contains a TPMS_CERTIFY_INFO structure whose name field contains a
    // valid Name for pubArea, as computed using the algorithm in the nameAlg field of pubArea.
    match &certinfo.typeattested {
        TpmuAttest::AttestCertify(Tpm2bName::Digest(name)) => {
            if *name != pubarea.name(pub_area)? {
                return Err(VerificationError::TpmNameMismatch);
            }
        }
        _ => return Err(VerificationError::TpmNameMismatch),
    }

    debug!(
        firmware_version = certinfo.firmware_version,
        clock = certinfo.clock_info.clock,
        reset_count = certinfo.clock_info.reset_count,
        restart_count = certinfo.clock_info.restart_count,
        safe = certinfo.clock_info.safe,
        "tpm certify info"
    );

    // Verify the sig is a valid signature over certInfo using the attestation public key in
    // aik_cert with the algorithm specified in alg.
    if !verify_signature(alg, aik_cert, sig, cert_info)? {
        debug!("tpm signature invalid");
        return Err(VerificationError::SignatureInvalid);
    }

    assert_tpm_attest_req(aik_cert)?;

    validate_extension::<FidoGenCeAaguid>(aik_cert, &acd.aaguid)?;

    Ok((TrustCategory::AttCa, AttestationEvidence::Chain(arr_x509)))
}

// https://www.w3.org/TR/webauthn-3/#sctn-apple-anonymous-attestation
pub(crate) fn verify_apple_anonymous_attestation(
    acd: &AttestedCredentialData,
    att_obj: &AttestationObject,
    client_data_hash: &[u8],
    x5c: &[Vec<u8>],
) -> FormatResult {
    let arr_x509 = parse_x5c(x5c)?;
    let attestn_cert = arr_x509.first().ok_or(VerificationError::X5CMissing)?;

    // nonce = SHA-256(authenticatorData || clientDataHash)
    let nonce = compute_sha256(&signed_data(att_obj, client_data_hash));

    validate_extension::<AppleAnonymousNonce>(attestn_cert, &nonce)?;

    // Verify credential public key matches the Subject Public Key of credCert.
    let credential_public_key = &acd.credential_pk;
    let subject_public_key = COSEKey::try_from((credential_public_key.type_, attestn_cert))?;

    if *credential_public_key != subject_public_key {
        return Err(VerificationError::CredentialSubjectKeyMismatch);
    }

    Ok((TrustCategory::AnonCa, AttestationEvidence::Chain(arr_x509)))
}

// https://www.w3.org/TR/webauthn-3/#sctn-android-key-attestation
pub(crate) fn verify_android_key_attestation(
    acd: &AttestedCredentialData,
    att_obj: &AttestationObject,
    client_data_hash: &[u8],
    alg: i128,
    sig: &[u8],
    x5c: &[Vec<u8>],
) -> FormatResult {
    let alg = statement_alg(alg, false)?;
    let arr_x509 = parse_x5c(x5c)?;
    let attestn_cert = arr_x509.first().ok_or(VerificationError::X5CMissing)?;

    let data_to_verify = signed_data(att_obj, client_data_hash);

    if !verify_signature(alg, attestn_cert, sig, &data_to_verify)? {
        debug!("android key signature invalid");
        return Err(VerificationError::SignatureInvalid);
    }

    // Verify that the public key in the first certificate in x5c matches the credentialPublicKey
    // in the attestedCredentialData in authenticatorData.
    let credential_public_key = &acd.credential_pk;
    let subject_public_key = COSEKey::try_from((credential_public_key.type_, attestn_cert))?;

    if *credential_public_key != subject_public_key {
        return Err(VerificationError::CredentialSubjectKeyMismatch);
    }

    // Verify that the attestationChallenge field in the attestation certificate extension data is
    // identical to clientDataHash.
    validate_extension::<AndroidKeyAttestationExtensionData>(
        attestn_cert,
        &client_data_hash.to_vec(),
    )?;

    Ok((TrustCategory::BasicFull, AttestationEvidence::Chain(arr_x509)))
}

// https://www.w3.org/TR/webauthn-3/#sctn-android-safetynet-attestation
pub(crate) fn verify_android_safetynet_attestation(
    att_obj: &AttestationObject,
    client_data_hash: &[u8],
    ver: &str,
    response: &[u8],
    config: &AttestationConfig,
    now: DateTime<Utc>,
) -> FormatResult {
    debug!(%ver, "begin verify_android_safetynet");

    let data_to_verify = compute_sha256(&signed_data(att_obj, client_data_hash));

    #[derive(Clone, Debug, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct SafetyNetAttestResponse {
        timestamp_ms: i64,
        nonce: Base64UrlSafeData,
        apk_package_name: Option<String>,
        cts_profile_match: bool,
        basic_integrity: bool,
        evaluation_type: Option<String>,
    }

    #[derive(Debug, thiserror::Error)]
    enum SafetyNetError {
        #[error("JWT error")]
        Jwt(#[from] compact_jwt::JwtError),

        #[error("Response is not UTF-8")]
        Encoding(#[from] std::str::Utf8Error),

        #[error("No cert in chain")]
        MissingCertChain,

        #[error("Invalid Cert")]
        BadCert,

        #[error("openssl")]
        OpenSSL(#[from] openssl::error::ErrorStack),

        #[error("nonce mismatch")]
        NonceMismatch,

        #[error("hostname invalid")]
        InvalidHostname,

        #[error("False CTS Profile Match")]
        CtsProfileMatchFailed,

        #[error("Timestamp is in the future")]
        FromFuture,

        #[error("Timestamp too old")]
        Expired,
    }

    let (x5c, safetynet_response) = |response: &[u8]| -> Result<
        (Vec<x509::X509>, SafetyNetAttestResponse),
        SafetyNetError,
    > {
        use std::str::FromStr;
        let token = std::str::from_utf8(response)?;
        trace!(?token);

        let jwsu = compact_jwt::JwsUnverified::from_str(token)?;

        let certs = jwsu
            .get_x5c_chain()?
            .ok_or(SafetyNetError::MissingCertChain)?;

        let leaf_cert = certs.first().ok_or(SafetyNetError::BadCert)?;

        // Verify with the embedded certificate.
        let jws: compact_jwt::Jws<SafetyNetAttestResponse> = jwsu.validate_embeded()?;

        let verified_claims = jws.into_inner();

        // The nonce is the SHA-256 hash of the concatenation of authenticatorData and
        // clientDataHash.
        if verified_claims.nonce.0 != data_to_verify {
            return Err(SafetyNetError::NonceMismatch);
        }

        let common_name = {
            let name = leaf_cert
                .subject_name()
                .entries_by_nid(openssl::nid::Nid::COMMONNAME)
                .next()
                .ok_or(SafetyNetError::InvalidHostname)?;
            name.data().as_utf8()?.to_string()
        };

        // attestationCert is issued to the hostname "attest.android.com"
        if common_name.as_str() != "attest.android.com" {
            return Err(SafetyNetError::InvalidHostname);
        }

        if config.require_safetynet_cts_profile_match && !verified_claims.cts_profile_match {
            return Err(SafetyNetError::CtsProfileMatchFailed);
        }

        if !config.danger_disable_certificate_time_checks {
            let now_ms = now.timestamp_millis();
            if verified_claims.timestamp_ms > now_ms + 60_000 {
                return Err(SafetyNetError::FromFuture);
            }
            if let Some(max_age) = config.safetynet_max_age {
                let max_age_ms = i64::try_from(max_age.as_millis()).unwrap_or(i64::MAX);
                if verified_claims.timestamp_ms < now_ms.saturating_sub(max_age_ms) {
                    return Err(SafetyNetError::Expired);
                }
            }
        }

        Ok((certs, verified_claims))
    }(response)
    .map_err(|e| {
        error!("jwt safety-net error: {:?}", e);
        VerificationError::SafetyNetResponseInvalid
    })?;

    debug!(
        apk_package_name = ?safetynet_response.apk_package_name,
        basic_integrity = safetynet_response.basic_integrity,
        evaluation_type = ?safetynet_response.evaluation_type,
        "safetynet response"
    );

    Ok((TrustCategory::BasicFull, AttestationEvidence::Chain(x5c)))
}

/// Verify a certificate chain, leaf first, against the root certificates of a trust anchor.
/// A chain that does not verify is reported as [`VerificationError::AttestationChainNotTrusted`].
pub(crate) fn verify_attestation_ca_chain(
    fullchain: &[x509::X509],
    roots: &[x509::X509],
    danger_disable_certificate_time_checks: bool,
) -> Result<(), VerificationError> {
    if roots.is_empty() {
        return Err(VerificationError::AttestationChainNotTrusted(
            "trust anchor has no root certificates".to_string(),
        ));
    }

    let (leaf, chain) = fullchain
        .split_first()
        .ok_or(VerificationError::X5CMissing)?;

    // Convert the chain to a stackref so that openssl can use it.
    let mut chain_stack = stack::Stack::new()?;
    for crt in chain.iter() {
        chain_stack.push(crt.clone())?;
    }

    let mut ca_store = x509::store::X509StoreBuilder::new()?;

    // In tests we may need to allow disabling time window validity.
    if danger_disable_certificate_time_checks {
        ca_store.set_flags(x509::verify::X509VerifyFlags::NO_CHECK_TIME)?;
    }

    for ca_crt in roots {
        ca_store.add_cert(ca_crt.clone())?;
    }

    let ca_store = ca_store.build();

    let mut ca_ctx = x509::X509StoreContext::new()?;

    // Note this is a result<result ... because the inner .init must return an errorstack
    // for openssl.
    let res = ca_ctx.init(&ca_store, leaf, &chain_stack, |ca_ctx_ref| {
        ca_ctx_ref.verify_cert().map(|_| {
            // The boolean is ignored in favour of the richer error.
            let res = ca_ctx_ref.error();
            if res == x509::X509VerifyResult::OK {
                Ok(())
            } else {
                debug!(
                    "ca_ctx_ref verify cert - error depth={}, sn={:?}",
                    ca_ctx_ref.error_depth(),
                    ca_ctx_ref.current_cert().map(|crt| crt.subject_name())
                );
                Err(format!(
                    "{} (depth {})",
                    res.error_string(),
                    ca_ctx_ref.error_depth()
                ))
            }
        })
    })?;

    res.map_err(VerificationError::AttestationChainNotTrusted)
}
