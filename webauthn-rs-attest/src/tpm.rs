//! TPM 2.0 structures carried by the `tpm` attestation format.
//! <https://trustedcomputinggroup.org/wp-content/uploads/TCG_TPM2_r1p59_Part2_Structures_pub.pdf>
//!
//! Only the fields that verification reads are kept. The rest are parsed for length and dropped.

use nom::combinator::{all_consuming, map, verify};
use nom::multi::length_data;
use nom::number::complete::{be_u16, be_u32, be_u64, be_u8};
use nom::IResult;
use openssl::hash;
use std::convert::TryFrom;

use crate::error::VerificationError;

const TPM_GENERATED_VALUE: u32 = 0xff54_4347;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TpmSt {
    AttestNv,
    AttestCommandAudit,
    AttestSessionAudit,
    AttestCertify,
    AttestQuote,
    AttestTime,
    AttestCreation,
    // The raw tag is only surfaced through Debug.
    #[allow(dead_code)]
    Unknown(u16),
}

impl From<u16> for TpmSt {
    fn from(v: u16) -> Self {
        match v {
            0x8014 => TpmSt::AttestNv,
            0x8015 => TpmSt::AttestCommandAudit,
            0x8016 => TpmSt::AttestSessionAudit,
            0x8017 => TpmSt::AttestCertify,
            0x8018 => TpmSt::AttestQuote,
            0x8019 => TpmSt::AttestTime,
            0x801a => TpmSt::AttestCreation,
            v => TpmSt::Unknown(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TpmAlgId {
    Rsa,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Null,
    Ecdaa,
    Ecc,
    #[allow(dead_code)]
    Other(u16),
}

impl From<u16> for TpmAlgId {
    fn from(v: u16) -> Self {
        match v {
            0x0001 => TpmAlgId::Rsa,
            0x0004 => TpmAlgId::Sha1,
            0x000b => TpmAlgId::Sha256,
            0x000c => TpmAlgId::Sha384,
            0x000d => TpmAlgId::Sha512,
            0x0010 => TpmAlgId::Null,
            0x001a => TpmAlgId::Ecdaa,
            0x0023 => TpmAlgId::Ecc,
            v => TpmAlgId::Other(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TpmiEccCurve {
    NistP256,
    NistP384,
    NistP521,
    #[allow(dead_code)]
    Other(u16),
}

impl From<u16> for TpmiEccCurve {
    fn from(v: u16) -> Self {
        match v {
            0x0003 => TpmiEccCurve::NistP256,
            0x0004 => TpmiEccCurve::NistP384,
            0x0005 => TpmiEccCurve::NistP521,
            v => TpmiEccCurve::Other(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TpmsClockInfo {
    pub clock: u64,
    pub reset_count: u32,
    pub restart_count: u32,
    pub safe: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Tpm2bName {
    None,
    /// A four byte handle rather than a digest.
    Handle,
    Digest(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TpmuAttest {
    /// The Name of the certified object. The qualified name is not retained.
    AttestCertify(Tpm2bName),
    /// Any other attestation type. The body is not parsed.
    Unsupported,
}

/// TPMS_ATTEST, the structure a TPM signs when it certifies a key it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TpmsAttest {
    pub type_: TpmSt,
    pub extra_data: Vec<u8>,
    pub clock_info: TpmsClockInfo,
    pub firmware_version: u64,
    pub typeattested: TpmuAttest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TpmsRsaParms {
    pub key_bits: u16,
    /// Zero selects the default exponent of 65537.
    pub exponent: u32,
}

impl TpmsRsaParms {
    pub fn effective_exponent(&self) -> u32 {
        if self.exponent == 0 {
            65537
        } else {
            self.exponent
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TpmsEccParms {
    pub curve_id: TpmiEccCurve,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TpmuPublicParms {
    Rsa(TpmsRsaParms),
    Ecc(TpmsEccParms),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TpmsEccPoint {
    pub x: Vec<u8>,
    pub y: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TpmuPublicId {
    Rsa(Vec<u8>),
    Ecc(TpmsEccPoint),
}

/// TPMT_PUBLIC, the TPM's description of the credential key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TpmtPublic {
    pub name_alg: TpmAlgId,
    pub parameters: TpmuPublicParms,
    pub unique: TpmuPublicId,
}

fn tpm2b_parser(i: &[u8]) -> IResult<&[u8], Vec<u8>> {
    map(length_data(be_u16), |d: &[u8]| d.to_vec())(i)
}

fn tpm_alg_id_parser(i: &[u8]) -> IResult<&[u8], TpmAlgId> {
    map(be_u16, TpmAlgId::from)(i)
}

fn tpm2b_name_parser(i: &[u8]) -> IResult<&[u8], Tpm2bName> {
    let (i, data) = length_data(be_u16)(i)?;
    let name = match data.len() {
        0 => Tpm2bName::None,
        4 => Tpm2bName::Handle,
        _ => Tpm2bName::Digest(data.to_vec()),
    };
    Ok((i, name))
}

fn clock_info_parser(i: &[u8]) -> IResult<&[u8], TpmsClockInfo> {
    let (i, clock) = be_u64(i)?;
    let (i, reset_count) = be_u32(i)?;
    let (i, restart_count) = be_u32(i)?;
    let (i, safe) = be_u8(i)?;
    Ok((
        i,
        TpmsClockInfo {
            clock,
            reset_count,
            restart_count,
            safe: safe == 1,
        },
    ))
}

fn certify_parser(i: &[u8]) -> IResult<&[u8], TpmuAttest> {
    let (i, name) = tpm2b_name_parser(i)?;
    let (i, _qualified_name) = tpm2b_name_parser(i)?;
    Ok((i, TpmuAttest::AttestCertify(name)))
}

fn tpms_attest_parser(i: &[u8]) -> IResult<&[u8], TpmsAttest> {
    let (i, _magic) = verify(be_u32, |magic| *magic == TPM_GENERATED_VALUE)(i)?;
    let (i, type_) = map(be_u16, TpmSt::from)(i)?;
    let (i, _qualified_signer) = tpm2b_name_parser(i)?;
    let (i, extra_data) = tpm2b_parser(i)?;
    let (i, clock_info) = clock_info_parser(i)?;
    let (i, firmware_version) = be_u64(i)?;

    let (i, typeattested) = if type_ == TpmSt::AttestCertify {
        all_consuming(certify_parser)(i)?
    } else {
        (&i[i.len()..], TpmuAttest::Unsupported)
    };

    Ok((
        i,
        TpmsAttest {
            type_,
            extra_data,
            clock_info,
            firmware_version,
            typeattested,
        },
    ))
}

// TPMT_SYM_DEF_OBJECT: an algorithm, then keyBits and mode unless the algorithm is null.
fn sym_def_object_parser(i: &[u8]) -> IResult<&[u8], ()> {
    let (i, algorithm) = tpm_alg_id_parser(i)?;
    if algorithm == TpmAlgId::Null {
        return Ok((i, ()));
    }
    let (i, _key_bits) = be_u16(i)?;
    let (i, _mode) = be_u16(i)?;
    Ok((i, ()))
}

// TPMT_RSA_SCHEME, TPMT_ECC_SCHEME and TPMT_KDF_SCHEME share this layout.
fn scheme_parser(i: &[u8]) -> IResult<&[u8], ()> {
    let (i, scheme) = tpm_alg_id_parser(i)?;
    match scheme {
        TpmAlgId::Null => Ok((i, ())),
        TpmAlgId::Ecdaa => {
            // hashAlg then the commit count
            let (i, _hash) = tpm_alg_id_parser(i)?;
            let (i, _count) = be_u16(i)?;
            Ok((i, ()))
        }
        _ => {
            let (i, _hash) = tpm_alg_id_parser(i)?;
            Ok((i, ()))
        }
    }
}

fn rsa_parms_parser(i: &[u8]) -> IResult<&[u8], TpmuPublicParms> {
    let (i, ()) = sym_def_object_parser(i)?;
    let (i, ()) = scheme_parser(i)?;
    let (i, key_bits) = be_u16(i)?;
    let (i, exponent) = be_u32(i)?;
    Ok((i, TpmuPublicParms::Rsa(TpmsRsaParms { key_bits, exponent })))
}

fn ecc_parms_parser(i: &[u8]) -> IResult<&[u8], TpmuPublicParms> {
    let (i, ()) = sym_def_object_parser(i)?;
    let (i, ()) = scheme_parser(i)?;
    let (i, curve_id) = map(be_u16, TpmiEccCurve::from)(i)?;
    let (i, ()) = scheme_parser(i)?;
    Ok((i, TpmuPublicParms::Ecc(TpmsEccParms { curve_id })))
}

fn ecc_point_parser(i: &[u8]) -> IResult<&[u8], TpmuPublicId> {
    let (i, x) = tpm2b_parser(i)?;
    let (i, y) = tpm2b_parser(i)?;
    Ok((i, TpmuPublicId::Ecc(TpmsEccPoint { x, y })))
}

fn tpmt_public_parser(i: &[u8]) -> IResult<&[u8], TpmtPublic> {
    let (i, type_) = verify(tpm_alg_id_parser, |t| {
        matches!(t, TpmAlgId::Rsa | TpmAlgId::Ecc)
    })(i)?;
    let (i, name_alg) = tpm_alg_id_parser(i)?;
    let (i, _object_attributes) = be_u32(i)?;
    let (i, _auth_policy) = length_data(be_u16)(i)?;

    let (i, parameters, unique) = if type_ == TpmAlgId::Rsa {
        let (i, parameters) = rsa_parms_parser(i)?;
        let (i, unique) = map(tpm2b_parser, TpmuPublicId::Rsa)(i)?;
        (i, parameters, unique)
    } else {
        let (i, parameters) = ecc_parms_parser(i)?;
        let (i, unique) = ecc_point_parser(i)?;
        (i, parameters, unique)
    };

    Ok((
        i,
        TpmtPublic {
            name_alg,
            parameters,
            unique,
        },
    ))
}

impl TryFrom<&[u8]> for TpmsAttest {
    type Error = VerificationError;

    fn try_from(data: &[u8]) -> Result<TpmsAttest, VerificationError> {
        all_consuming(tpms_attest_parser)(data)
            .map_err(|e| {
                debug!(?e, "certInfo");
                VerificationError::TpmStructureInvalid
            })
            .map(|(_, attest)| attest)
    }
}

impl TryFrom<&[u8]> for TpmtPublic {
    type Error = VerificationError;

    fn try_from(data: &[u8]) -> Result<TpmtPublic, VerificationError> {
        all_consuming(tpmt_public_parser)(data)
            .map_err(|e| {
                debug!(?e, "pubArea");
                VerificationError::TpmStructureInvalid
            })
            .map(|(_, public)| public)
    }
}

impl TpmtPublic {
    /// The TPM Name of this object: the nameAlg identifier followed by the nameAlg digest of
    /// the encoded public area.
    pub fn name(&self, pub_area: &[u8]) -> Result<Vec<u8>, VerificationError> {
        let (id, md): (u16, _) = match self.name_alg {
            TpmAlgId::Sha1 => (0x0004, hash::MessageDigest::sha1()),
            TpmAlgId::Sha256 => (0x000b, hash::MessageDigest::sha256()),
            TpmAlgId::Sha384 => (0x000c, hash::MessageDigest::sha384()),
            TpmAlgId::Sha512 => (0x000d, hash::MessageDigest::sha512()),
            name_alg => {
                debug!(?name_alg, "unsupported tpm name algorithm");
                return Err(VerificationError::TpmNameAlgUnsupported);
            }
        };
        let digest = hash::hash(md, pub_area)?;
        Ok(id.to_be_bytes().iter().chain(digest.iter()).copied().collect())
    }
}
