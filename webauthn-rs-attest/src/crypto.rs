//! Cryptographic operation wrapper for attestation verification. This module exists to
//! allow ease of auditing, and to keep every call into the cryptographic provider in one
//! place. This module uses OpenSSL as the cryptographic primitive provider, with
//! x509-parser for the certificate extensions OpenSSL does not expose.

#![allow(non_camel_case_types)]

use std::convert::TryFrom;

use openssl::{bn, ec, hash, nid, pkey, rsa, sha, sign, x509};
use serde_cbor_2::Value;
use x509_parser::extensions::{GeneralName, SubjectAlternativeName};
use x509_parser::oid_registry::Oid;
use x509_parser::x509::X509Version;

use crate::error::{DecodeError, VerificationError};
use crate::interface::*;

pub(crate) const TCG_AT_TPM_MANUFACTURER: Oid<'static> = der_parser::oid!(2.23.133 .2 .1);
pub(crate) const TCG_AT_TPM_MODEL: Oid<'static> = der_parser::oid!(2.23.133 .2 .2);
pub(crate) const TCG_AT_TPM_VERSION: Oid<'static> = der_parser::oid!(2.23.133 .2 .3);
pub(crate) const TCG_KP_AIK_CERTIFICATE: Oid<'static> = der_parser::oid!(2.23.133 .8 .3);

impl ECDSACurve {
    fn to_openssl_nid(self) -> nid::Nid {
        match self {
            ECDSACurve::SECP256R1 => nid::Nid::X9_62_PRIME256V1,
            ECDSACurve::SECP384R1 => nid::Nid::SECP384R1,
            ECDSACurve::SECP521R1 => nid::Nid::SECP521R1,
        }
    }

    fn from_openssl_nid(n: nid::Nid) -> Option<Self> {
        match n {
            nid::Nid::X9_62_PRIME256V1 => Some(ECDSACurve::SECP256R1),
            nid::Nid::SECP384R1 => Some(ECDSACurve::SECP384R1),
            nid::Nid::SECP521R1 => Some(ECDSACurve::SECP521R1),
            _ => None,
        }
    }
}

impl EDDSACurve {
    fn to_openssl_id(self) -> pkey::Id {
        match self {
            EDDSACurve::ED25519 => pkey::Id::ED25519,
            EDDSACurve::ED448 => pkey::Id::ED448,
        }
    }
}

fn message_digest(alg: COSEAlgorithm) -> Option<hash::MessageDigest> {
    match alg {
        COSEAlgorithm::INSECURE_RS1 => Some(hash::MessageDigest::sha1()),
        COSEAlgorithm::ES256 | COSEAlgorithm::RS256 | COSEAlgorithm::PS256 => {
            Some(hash::MessageDigest::sha256())
        }
        COSEAlgorithm::ES384 | COSEAlgorithm::RS384 | COSEAlgorithm::PS384 => {
            Some(hash::MessageDigest::sha384())
        }
        COSEAlgorithm::ES512 | COSEAlgorithm::RS512 | COSEAlgorithm::PS512 => {
            Some(hash::MessageDigest::sha512())
        }
        COSEAlgorithm::EDDSA => None,
    }
}

/// The declared algorithm must belong to the family of the key it is checked with, so that a
/// statement can not pick how its signature is interpreted.
fn assert_alg_key_type(
    alg: COSEAlgorithm,
    pkey: &pkey::PKeyRef<pkey::Public>,
) -> Result<(), VerificationError> {
    let matches = match alg {
        COSEAlgorithm::ES256 | COSEAlgorithm::ES384 | COSEAlgorithm::ES512 => {
            pkey.id() == pkey::Id::EC
        }
        COSEAlgorithm::RS256
        | COSEAlgorithm::RS384
        | COSEAlgorithm::RS512
        | COSEAlgorithm::PS256
        | COSEAlgorithm::PS384
        | COSEAlgorithm::PS512
        | COSEAlgorithm::INSECURE_RS1 => pkey.id() == pkey::Id::RSA,
        COSEAlgorithm::EDDSA => matches!(pkey.id(), pkey::Id::ED25519 | pkey::Id::ED448),
    };

    if matches {
        Ok(())
    } else {
        debug!(?alg, key_type = ?pkey.id(), "algorithm does not match key type");
        Err(VerificationError::AlgorithmMismatch)
    }
}

fn pkey_verify_signature(
    alg: COSEAlgorithm,
    pkey: &pkey::PKeyRef<pkey::Public>,
    signature: &[u8],
    verification_data: &[u8],
) -> bool {
    let result = match (alg, message_digest(alg)) {
        (COSEAlgorithm::EDDSA, _) | (_, None) => sign::Verifier::new_without_digest(pkey)
            .and_then(|mut verifier| verifier.verify_oneshot(signature, verification_data)),
        (COSEAlgorithm::PS256 | COSEAlgorithm::PS384 | COSEAlgorithm::PS512, Some(md)) => {
            sign::Verifier::new(md, pkey).and_then(|mut verifier| {
                verifier.set_rsa_padding(rsa::Padding::PKCS1_PSS)?;
                verifier.set_rsa_mgf1_md(md)?;
                verifier.set_rsa_pss_saltlen(sign::RsaPssSaltlen::DIGEST_LENGTH)?;
                verifier.update(verification_data)?;
                verifier.verify(signature)
            })
        }
        (_, Some(md)) => sign::Verifier::new(md, pkey).and_then(|mut verifier| {
            verifier.update(verification_data)?;
            verifier.verify(signature)
        }),
    };

    // A malformed signature is reported by some OpenSSL versions as an error rather than a
    // failed verification.
    result.unwrap_or_else(|e| {
        debug!(?e, ?alg, "signature verification error");
        false
    })
}

/// Validate a signature made by the key of an x509 certificate.
pub(crate) fn verify_signature(
    alg: COSEAlgorithm,
    certificate: &x509::X509Ref,
    signature: &[u8],
    verification_data: &[u8],
) -> Result<bool, VerificationError> {
    let pkey = certificate.public_key()?;
    assert_alg_key_type(alg, &pkey)?;
    Ok(pkey_verify_signature(
        alg,
        &pkey,
        signature,
        verification_data,
    ))
}

/// Hash `input` with the digest `alg` signs with.
pub(crate) fn only_hash_from_type(
    alg: COSEAlgorithm,
    input: &[u8],
) -> Result<Vec<u8>, VerificationError> {
    match message_digest(alg) {
        Some(md) => {
            if alg == COSEAlgorithm::INSECURE_RS1 {
                warn!("INSECURE SHA1 USAGE DETECTED");
            }
            Ok(hash::hash(md, input)?.to_vec())
        }
        None => {
            debug!(?alg, "no digest for algorithm");
            Err(VerificationError::UnsupportedAlgorithm(alg as i128))
        }
    }
}

/// Compute the sha256 of a slice of data.
pub fn compute_sha256(data: &[u8]) -> [u8; 32] {
    sha::sha256(data)
}

/// The subject key identifier of a certificate: the extension if present, otherwise the SHA-1
/// of the subject public key bits as in RFC 5280 section 4.2.1.2 method (1).
pub fn subject_key_identifier(certificate: &x509::X509Ref) -> Result<Vec<u8>, VerificationError> {
    if let Some(ski) = certificate.subject_key_id() {
        return Ok(ski.as_slice().to_vec());
    }

    let der_bytes = certificate.to_der()?;
    let (_, cert) = x509_parser::parse_x509_certificate(&der_bytes)
        .map_err(|_| VerificationError::X5CInvalid)?;

    Ok(sha::sha1(&cert.public_key().subject_public_key.data).to_vec())
}

pub(crate) fn is_secp256r1(certificate: &x509::X509Ref) -> Result<bool, VerificationError> {
    let pk = certificate.public_key()?;
    let ec_key = pk
        .ec_key()
        .map_err(|_| VerificationError::CertificatePublicKeyInvalid)?;
    ec_key.check_key()?;

    Ok(ec_key.group().curve_name() == Some(nid::Nid::X9_62_PRIME256V1))
}

fn basic_constraints_ca(
    cert: &x509_parser::certificate::X509Certificate,
) -> Result<bool, VerificationError> {
    // A missing extension means the certificate cannot act as a CA.
    cert.basic_constraints()
        .map_err(|e| {
            debug!(?e, "basic constraints");
            VerificationError::CertificateRequirementsNotMet
        })
        .map(|bc| bc.map(|bc| bc.value.ca).unwrap_or(false))
}

/// Check the packed attestation certificate requirements.
/// <https://www.w3.org/TR/webauthn-3/#sctn-packed-attestation-cert-requirements>
pub(crate) fn assert_packed_attest_req(pubk: &x509::X509Ref) -> Result<(), VerificationError> {
    // Version MUST be set to 3 (which is indicated by an ASN.1 INTEGER with value 2).
    if pubk.version() != 2 {
        debug!(version = pubk.version(), "packed attestation certificate version");
        return Err(VerificationError::CertificateRequirementsNotMet);
    }

    // Subject-C, Subject-O, Subject-OU = "Authenticator Attestation", Subject-CN
    let subject_name_ref = pubk.subject_name();

    let subject_c = subject_name_ref.entries_by_nid(nid::Nid::COUNTRYNAME).next();
    let subject_o = subject_name_ref
        .entries_by_nid(nid::Nid::ORGANIZATIONNAME)
        .next();
    let subject_ou = subject_name_ref
        .entries_by_nid(nid::Nid::ORGANIZATIONALUNITNAME)
        .next();
    let subject_cn = subject_name_ref.entries_by_nid(nid::Nid::COMMONNAME).next();

    if subject_c.is_none() || subject_o.is_none() || subject_cn.is_none() {
        debug!("packed attestation certificate subject is incomplete");
        return Err(VerificationError::CertificateRequirementsNotMet);
    }

    match subject_ou.map(|ou| ou.data().as_utf8()) {
        Some(Ok(ou_d)) if ou_d.to_string() == "Authenticator Attestation" => {}
        _ => {
            debug!("packed attestation certificate OU is invalid");
            return Err(VerificationError::CertificateRequirementsNotMet);
        }
    }

    // The Basic Constraints extension MUST have the CA component set to false.
    let der_bytes = pubk.to_der()?;
    let (_, cert) = x509_parser::parse_x509_certificate(&der_bytes)
        .map_err(|_| VerificationError::X5CInvalid)?;

    if basic_constraints_ca(&cert)? {
        debug!("packed attestation certificate is a CA");
        return Err(VerificationError::CertificateRequirementsNotMet);
    }

    Ok(())
}

pub(crate) struct TpmSanData {
    pub manufacturer: String,
    pub model: String,
    pub version: String,
}

#[derive(Default)]
struct TpmSanDataBuilder {
    manufacturer: Option<String>,
    model: Option<String>,
    version: Option<String>,
}

impl TpmSanDataBuilder {
    fn new() -> Self {
        Default::default()
    }

    fn attribute(mut self, oid: &Oid, value: &str) -> Self {
        if *oid == TCG_AT_TPM_MANUFACTURER {
            self.manufacturer = Some(value.to_string());
        } else if *oid == TCG_AT_TPM_MODEL {
            self.model = Some(value.to_string());
        } else if *oid == TCG_AT_TPM_VERSION {
            self.version = Some(value.to_string());
        }
        self
    }

    fn build(self) -> Result<TpmSanData, VerificationError> {
        self.manufacturer
            .zip(self.model)
            .zip(self.version)
            .map(|((manufacturer, model), version)| TpmSanData {
                manufacturer,
                model,
                version,
            })
            .ok_or(VerificationError::CertificateRequirementsNotMet)
    }
}

/// The value of an otherName is an explicitly tagged `[0]` string.
fn other_name_str(value: &[u8]) -> Result<String, VerificationError> {
    use der_parser::der::{parse_der, parse_der_tagged_explicit};

    parse_der_tagged_explicit(0, parse_der)(value)
        .map_err(|e| {
            debug!(?e, "otherName");
            VerificationError::CertificateRequirementsNotMet
        })
        .and_then(|(_, obj)| {
            let (_, _, inner) = obj
                .as_tagged()
                .map_err(|_| VerificationError::CertificateRequirementsNotMet)?;
            inner
                .as_str()
                .map(str::to_string)
                .map_err(|_| VerificationError::CertificateRequirementsNotMet)
        })
}

impl TryFrom<&SubjectAlternativeName<'_>> for TpmSanData {
    type Error = VerificationError;

    fn try_from(san: &SubjectAlternativeName<'_>) -> Result<Self, Self::Error> {
        san.general_names
            .iter()
            .try_fold(
                TpmSanDataBuilder::new(),
                |builder, general_name| match general_name {
                    GeneralName::DirectoryName(name) => {
                        name.iter_attributes().try_fold(builder, |builder, attr| {
                            attr.as_str()
                                .map(|value| builder.attribute(attr.attr_type(), value))
                                .map_err(|_| VerificationError::CertificateRequirementsNotMet)
                        })
                    }
                    GeneralName::OtherName(oid, value) => {
                        other_name_str(value).map(|value| builder.attribute(oid, &value))
                    }
                    _ => Ok(builder),
                },
            )
            .and_then(TpmSanDataBuilder::build)
    }
}

/// Check the TPM AIK certificate requirements.
/// <https://www.w3.org/TR/webauthn-3/#sctn-tpm-cert-requirements>
pub(crate) fn assert_tpm_attest_req(x509: &x509::X509Ref) -> Result<(), VerificationError> {
    let der_bytes = x509.to_der()?;
    let (_, cert) = x509_parser::parse_x509_certificate(&der_bytes)
        .map_err(|_| VerificationError::X5CInvalid)?;

    // Version MUST be set to 3.
    if cert.version() != X509Version::V3 {
        debug!("aik certificate is not version 3");
        return Err(VerificationError::CertificateRequirementsNotMet);
    }

    // Subject field MUST be set to empty.
    if cert.subject().iter().next().is_some() {
        debug!("aik certificate subject is not empty");
        return Err(VerificationError::CertificateRequirementsNotMet);
    }

    // The Subject Alternative Name extension MUST be set as defined in [TPMv2-EK-Profile] section 3.2.9.
    let san = cert
        .subject_alternative_name()
        .map_err(|_| VerificationError::CertificateRequirementsNotMet)?
        .ok_or(VerificationError::CertificateRequirementsNotMet)?;

    let san_data = TpmSanData::try_from(san.value)?;
    debug!(
        manufacturer = %san_data.manufacturer,
        model = %san_data.model,
        version = %san_data.version,
        "aik certificate tpm"
    );

    // The Extended Key Usage extension MUST contain the OID 2.23.133.8.3
    let eku = cert
        .extended_key_usage()
        .map_err(|_| VerificationError::CertificateRequirementsNotMet)?
        .ok_or(VerificationError::CertificateRequirementsNotMet)?;

    if !eku.value.other.contains(&TCG_KP_AIK_CERTIFICATE) {
        debug!("aik certificate is missing tcg-kp-AIKCertificate");
        return Err(VerificationError::CertificateRequirementsNotMet);
    }

    // The Basic Constraints extension MUST have the CA component set to false.
    if basic_constraints_ca(&cert)? {
        debug!("aik certificate is a CA");
        return Err(VerificationError::CertificateRequirementsNotMet);
    }

    Ok(())
}

fn cose_map_get<'a>(
    m: &'a std::collections::BTreeMap<Value, Value>,
    label: i128,
) -> Result<&'a Value, DecodeError> {
    m.get(&Value::Integer(label))
        .ok_or(DecodeError::InvalidCBORValue)
}

impl TryFrom<&Value> for COSEKey {
    type Error = DecodeError;

    fn try_from(d: &Value) -> Result<COSEKey, Self::Error> {
        let m = cbor_try_map!(d)?;

        // See also https://tools.ietf.org/html/rfc8152#section-3.1
        // Label 1 is the key type, label 3 the algorithm, and the negative labels are
        // specific to the key type.
        let key_type = cbor_try_i128!(cose_map_get(m, 1)?)?;
        let type_ = cbor_try_i128!(cose_map_get(m, 3)?).and_then(COSEAlgorithm::try_from)?;

        let key = if key_type == COSEKeyTypeId::EC_EC2 as i128
            && matches!(
                type_,
                COSEAlgorithm::ES256 | COSEAlgorithm::ES384 | COSEAlgorithm::ES512
            ) {
            // crv (-1), x (-2) and y (-3)
            let curve = cbor_try_i128!(cose_map_get(m, -1)?).and_then(ECDSACurve::try_from)?;
            let x = cbor_try_bytes!(cose_map_get(m, -2)?)?;
            let y = cbor_try_bytes!(cose_map_get(m, -3)?)?;

            let coord_len = curve.coordinate_size();
            if x.len() != coord_len || y.len() != coord_len {
                return Err(DecodeError::COSEKeyECDSAXYInvalid);
            }

            COSEKeyType::EC_EC2(COSEEC2Key {
                curve,
                x: x.clone(),
                y: y.clone(),
            })
        } else if key_type == COSEKeyTypeId::EC_RSA as i128
            && matches!(
                type_,
                COSEAlgorithm::RS256
                    | COSEAlgorithm::RS384
                    | COSEAlgorithm::RS512
                    | COSEAlgorithm::PS256
                    | COSEAlgorithm::PS384
                    | COSEAlgorithm::PS512
            )
        {
            // n (-1) is 256 bytes, e (-2) is 3 bytes
            let n = cbor_try_bytes!(cose_map_get(m, -1)?)?;
            let e = cbor_try_bytes!(cose_map_get(m, -2)?)?;

            if n.len() != 256 || e.as_slice() != [1, 0, 1] {
                return Err(DecodeError::COSEKeyRSANEInvalid);
            }

            COSEKeyType::RSA(COSERSAKey {
                n: n.clone(),
                e: [1, 0, 1],
            })
        } else if key_type == COSEKeyTypeId::EC_OKP as i128 && type_ == COSEAlgorithm::EDDSA {
            // https://datatracker.ietf.org/doc/html/rfc8152#section-13.2
            let curve = cbor_try_i128!(cose_map_get(m, -1)?).and_then(EDDSACurve::try_from)?;
            let x = cbor_try_bytes!(cose_map_get(m, -2)?)?;

            if x.len() != curve.coordinate_size() {
                return Err(DecodeError::COSEKeyEDDSAXInvalid);
            }

            COSEKeyType::EC_OKP(COSEOKPKey {
                curve,
                x: x.clone(),
            })
        } else {
            debug!(?key_type, ?type_, "unsupported cose key");
            return Err(DecodeError::COSEKeyInvalidType);
        };

        let cose_key = COSEKey { type_, key };

        // "Applications MUST check that the curve and the key type are consistent and reject a
        // key if they are not." OpenSSL does that when loading the key.
        cose_key.validate()?;
        Ok(cose_key)
    }
}

impl TryFrom<(COSEAlgorithm, &x509::X509)> for COSEKey {
    type Error = VerificationError;

    fn try_from((alg, certificate): (COSEAlgorithm, &x509::X509)) -> Result<COSEKey, Self::Error> {
        let pkey = certificate.public_key()?;

        let key = match alg {
            COSEAlgorithm::ES256 | COSEAlgorithm::ES384 | COSEAlgorithm::ES512 => {
                let ec_key = pkey
                    .ec_key()
                    .map_err(|_| VerificationError::CertificatePublicKeyInvalid)?;
                let group = ec_key.group();
                let curve = group
                    .curve_name()
                    .and_then(ECDSACurve::from_openssl_nid)
                    .ok_or(VerificationError::CertificatePublicKeyInvalid)?;

                let mut ctx = bn::BigNumContext::new()?;
                let mut xbn = bn::BigNum::new()?;
                let mut ybn = bn::BigNum::new()?;
                ec_key
                    .public_key()
                    .affine_coordinates_gfp(group, &mut xbn, &mut ybn, &mut ctx)?;

                let coord_len = curve.coordinate_size() as i32;
                COSEKeyType::EC_EC2(COSEEC2Key {
                    curve,
                    x: xbn.to_vec_padded(coord_len)?,
                    y: ybn.to_vec_padded(coord_len)?,
                })
            }
            COSEAlgorithm::RS256
            | COSEAlgorithm::RS384
            | COSEAlgorithm::RS512
            | COSEAlgorithm::PS256
            | COSEAlgorithm::PS384
            | COSEAlgorithm::PS512 => {
                let rsa_key = pkey
                    .rsa()
                    .map_err(|_| VerificationError::CertificatePublicKeyInvalid)?;
                let e: [u8; 3] = rsa_key
                    .e()
                    .to_vec_padded(3)
                    .ok()
                    .and_then(|e| e.try_into().ok())
                    .ok_or(VerificationError::CertificatePublicKeyInvalid)?;

                COSEKeyType::RSA(COSERSAKey {
                    n: rsa_key.n().to_vec(),
                    e,
                })
            }
            COSEAlgorithm::EDDSA => {
                let curve = match pkey.id() {
                    pkey::Id::ED25519 => EDDSACurve::ED25519,
                    pkey::Id::ED448 => EDDSACurve::ED448,
                    _ => return Err(VerificationError::CertificatePublicKeyInvalid),
                };
                COSEKeyType::EC_OKP(COSEOKPKey {
                    curve,
                    x: pkey.raw_public_key()?,
                })
            }
            COSEAlgorithm::INSECURE_RS1 => {
                return Err(VerificationError::UnsupportedAlgorithm(alg as i128));
            }
        };

        Ok(COSEKey { type_: alg, key })
    }
}

impl COSEKey {
    /// The key as an uncompressed point `0x04 || x || y`, the form U2F signs over.
    pub(crate) fn get_alg_key_ecc_x962_raw(&self) -> Result<Vec<u8>, VerificationError> {
        match &self.key {
            COSEKeyType::EC_EC2(ecpk) => Ok([0x04]
                .iter()
                .chain(ecpk.x.iter())
                .chain(ecpk.y.iter())
                .copied()
                .collect()),
            _ => {
                debug!("credential is not an ec2 key");
                Err(VerificationError::UnsupportedAlgorithm(self.type_ as i128))
            }
        }
    }

    pub(crate) fn validate(&self) -> Result<(), openssl::error::ErrorStack> {
        self.get_openssl_pkey().map(|_| ())
    }

    pub(crate) fn get_openssl_pkey(
        &self,
    ) -> Result<pkey::PKey<pkey::Public>, openssl::error::ErrorStack> {
        match &self.key {
            COSEKeyType::EC_EC2(ec2k) => {
                let ec_group = ec::EcGroup::from_curve_name(ec2k.curve.to_openssl_nid())?;
                let xbn = bn::BigNum::from_slice(&ec2k.x)?;
                let ybn = bn::BigNum::from_slice(&ec2k.y)?;

                let ec_key = ec::EcKey::from_public_key_affine_coordinates(&ec_group, &xbn, &ybn)?;

                // Validate the key is sound: the point is on the curve.
                ec_key.check_key()?;

                pkey::PKey::from_ec_key(ec_key)
            }
            COSEKeyType::RSA(rsak) => {
                let nbn = bn::BigNum::from_slice(&rsak.n)?;
                let ebn = bn::BigNum::from_slice(&rsak.e)?;

                let rsa_key = rsa::Rsa::from_public_components(nbn, ebn)?;
                pkey::PKey::from_rsa(rsa_key)
            }
            COSEKeyType::EC_OKP(edk) => {
                pkey::PKey::public_key_from_raw_bytes(&edk.x, edk.curve.to_openssl_id())
            }
        }
    }

    /// Verify a signature made by this key, with the algorithm the key declares.
    pub fn verify_signature(
        &self,
        signature: &[u8],
        verification_data: &[u8],
    ) -> Result<bool, VerificationError> {
        let pkey = self.get_openssl_pkey()?;
        assert_alg_key_type(self.type_, &pkey)?;
        Ok(pkey_verify_signature(
            self.type_,
            &pkey,
            signature,
            verification_data,
        ))
    }
}
