//! Decoders for the attestation object and the authenticator data it carries.
//!
//! Everything here is structural. Nothing is trusted or verified, but every length is bounded
//! by [DecodeLimits] before it is allowed to drive an allocation.

use std::collections::BTreeMap;

use nom::bytes::complete::take;
use nom::combinator::cond;
use nom::multi::length_data;
use nom::number::complete::{be_u16, be_u32, be_u8};
use serde::Deserialize;
use serde_cbor_2::Value;

use crate::error::DecodeError;
use crate::interface::*;

struct AttestedCredentialDataRaw<'a> {
    aaguid: &'a [u8],
    credential_id: &'a [u8],
    credential_pk: Value,
}

struct AuthenticatorDataRaw<'a> {
    rp_id_hash: &'a [u8],
    flags: u8,
    counter: u32,
    acd: Option<AttestedCredentialDataRaw<'a>>,
}

/// Parse exactly one CBOR item from the front of the input, leaving the rest.
fn cbor_value_parser(i: &[u8]) -> nom::IResult<&[u8], Value> {
    let mut deserializer = serde_cbor_2::Deserializer::from_slice(i);
    let v = Value::deserialize(&mut deserializer).map_err(|e| {
        debug!(?e, "cbor_value_parser");
        nom::Err::Failure(nom::error::Error::new(i, nom::error::ErrorKind::Verify))
    })?;

    let len = deserializer.byte_offset();
    let (i, _) = take(len)(i)?;
    Ok((i, v))
}

fn acd_parser(i: &[u8]) -> nom::IResult<&[u8], AttestedCredentialDataRaw> {
    let (i, aaguid) = take(16usize)(i)?;
    let (i, credential_id) = length_data(be_u16)(i)?;
    let (i, credential_pk) = cbor_value_parser(i)?;

    Ok((
        i,
        AttestedCredentialDataRaw {
            aaguid,
            credential_id,
            credential_pk,
        },
    ))
}

fn authenticator_data_parser(i: &[u8]) -> nom::IResult<&[u8], AuthenticatorDataRaw> {
    let (i, rp_id_hash) = take(32usize)(i)?;
    let (i, flags) = be_u8(i)?;
    let (i, counter) = be_u32(i)?;
    let (i, acd) = cond(
        flags & AuthenticatorFlags::ATTESTED_CREDENTIAL_DATA != 0,
        acd_parser,
    )(i)?;

    Ok((
        i,
        AuthenticatorDataRaw {
            rp_id_hash,
            flags,
            counter,
            acd,
        },
    ))
}

impl AuthenticatorData {
    /// Decode authenticator data, rejecting anything that is not exactly one well formed
    /// record.
    pub fn from_slice(data: &[u8], limits: &DecodeLimits) -> Result<Self, DecodeError> {
        if data.len() > limits.max_auth_data_len {
            return Err(DecodeError::TooLarge {
                len: data.len(),
                limit: limits.max_auth_data_len,
            });
        }

        let (rest, raw) = authenticator_data_parser(data).map_err(|e| {
            debug!(?e, "authenticator_data_parser");
            DecodeError::AuthenticatorDataInvalid
        })?;

        let flags = AuthenticatorFlags(raw.flags);

        let extensions = match (flags.extension_data(), rest.is_empty()) {
            (false, true) => None,
            (true, true) => {
                debug!("extension data flag set, but no extensions follow");
                return Err(DecodeError::ExtensionDataFlagMismatch);
            }
            (true, false) => {
                let (rest, ext) = cbor_value_parser(rest).map_err(|e| {
                    debug!(?e, "extensions");
                    DecodeError::AuthenticatorDataInvalid
                })?;
                if !rest.is_empty() {
                    return Err(DecodeError::AuthenticatorDataTrailingBytes);
                }
                if !matches!(ext, Value::Map(_)) {
                    return Err(DecodeError::InvalidCBORValue);
                }
                Some(ext)
            }
            (false, false) => {
                // An extension map without its flag is a flag mismatch, anything else is junk.
                return match cbor_value_parser(rest) {
                    Ok((r, Value::Map(_))) if r.is_empty() => {
                        Err(DecodeError::ExtensionDataFlagMismatch)
                    }
                    _ => Err(DecodeError::AuthenticatorDataTrailingBytes),
                };
            }
        };

        let acd = raw
            .acd
            .map(|acd| {
                if acd.credential_id.len() > limits.max_credential_id_len {
                    return Err(DecodeError::CredentialIdTooLong {
                        len: acd.credential_id.len(),
                        limit: limits.max_credential_id_len,
                    });
                }

                let aaguid: Aaguid = acd
                    .aaguid
                    .try_into()
                    .map_err(|_| DecodeError::AuthenticatorDataInvalid)?;

                let credential_pk = COSEKey::try_from(&acd.credential_pk)?;

                Ok(AttestedCredentialData {
                    aaguid,
                    credential_id: acd.credential_id.to_vec(),
                    credential_pk,
                })
            })
            .transpose()?;

        let rp_id_hash: [u8; 32] = raw
            .rp_id_hash
            .try_into()
            .map_err(|_| DecodeError::AuthenticatorDataInvalid)?;

        Ok(AuthenticatorData {
            rp_id_hash,
            flags,
            counter: raw.counter,
            acd,
            extensions,
        })
    }
}

type StatementMap = BTreeMap<Value, Value>;

fn stmt_field<'a>(m: &'a StatementMap, name: &'static str) -> Option<&'a Value> {
    m.get(&Value::Text(name.to_string()))
}

fn stmt_required<'a>(m: &'a StatementMap, name: &'static str) -> Result<&'a Value, DecodeError> {
    stmt_field(m, name).ok_or(DecodeError::AttestationStatementFieldMissing(name))
}

fn stmt_i128(m: &StatementMap, name: &'static str) -> Result<i128, DecodeError> {
    cbor_try_i128!(stmt_required(m, name)?)
        .map_err(|_| DecodeError::AttestationStatementFieldInvalid(name))
}

fn stmt_bytes(m: &StatementMap, name: &'static str) -> Result<Vec<u8>, DecodeError> {
    cbor_try_bytes!(stmt_required(m, name)?)
        .cloned()
        .map_err(|_| DecodeError::AttestationStatementFieldInvalid(name))
}

fn stmt_string(m: &StatementMap, name: &'static str) -> Result<String, DecodeError> {
    cbor_try_string!(stmt_required(m, name)?)
        .cloned()
        .map_err(|_| DecodeError::AttestationStatementFieldInvalid(name))
}

fn x5c_from_value(v: &Value) -> Result<Vec<Vec<u8>>, DecodeError> {
    cbor_try_array!(v)
        .and_then(|certs| {
            certs
                .iter()
                .map(|c| cbor_try_bytes!(c).cloned())
                .collect::<Result<Vec<_>, _>>()
        })
        .map_err(|_| DecodeError::AttestationStatementFieldInvalid("x5c"))
}

fn stmt_x5c(m: &StatementMap) -> Result<Vec<Vec<u8>>, DecodeError> {
    x5c_from_value(stmt_required(m, "x5c")?)
}

impl AttestationStatement {
    /// Pick the fields `format` defines out of an `attStmt` map.
    pub(crate) fn from_map(format: AttestationFormat, m: &StatementMap) -> Result<Self, DecodeError> {
        let stmt = match format {
            AttestationFormat::Packed => AttestationStatement::Packed {
                alg: stmt_i128(m, "alg")?,
                sig: stmt_bytes(m, "sig")?,
                x5c: stmt_field(m, "x5c").map(x5c_from_value).transpose()?,
                ecdaa_key_id: stmt_field(m, "ecdaaKeyId")
                    .map(|v| {
                        cbor_try_bytes!(v)
                            .cloned()
                            .map_err(|_| DecodeError::AttestationStatementFieldInvalid("ecdaaKeyId"))
                    })
                    .transpose()?,
            },
            AttestationFormat::Tpm => AttestationStatement::Tpm {
                ver: stmt_string(m, "ver")?,
                alg: stmt_i128(m, "alg")?,
                sig: stmt_bytes(m, "sig")?,
                x5c: stmt_x5c(m)?,
                cert_info: stmt_bytes(m, "certInfo")?,
                pub_area: stmt_bytes(m, "pubArea")?,
            },
            AttestationFormat::AndroidKey => AttestationStatement::AndroidKey {
                alg: stmt_i128(m, "alg")?,
                sig: stmt_bytes(m, "sig")?,
                x5c: stmt_x5c(m)?,
            },
            AttestationFormat::AndroidSafetyNet => AttestationStatement::AndroidSafetyNet {
                ver: stmt_string(m, "ver")?,
                response: stmt_bytes(m, "response")?,
            },
            AttestationFormat::FIDOU2F => AttestationStatement::FIDOU2F {
                sig: stmt_bytes(m, "sig")?,
                x5c: stmt_x5c(m)?,
            },
            AttestationFormat::AppleAnonymous => AttestationStatement::AppleAnonymous {
                x5c: stmt_x5c(m)?,
            },
            AttestationFormat::None => {
                if !m.is_empty() {
                    return Err(DecodeError::AttestationStatementNotEmpty);
                }
                AttestationStatement::None
            }
        };
        Ok(stmt)
    }
}

fn object_field<'a>(m: &'a StatementMap, name: &'static str) -> Result<&'a Value, DecodeError> {
    m.get(&Value::Text(name.to_string()))
        .ok_or(DecodeError::AttestationObjectFieldMissing(name))
}

impl AttestationObject {
    /// Decode a CBOR `attestationObject` as sent by the client.
    pub fn from_slice(data: &[u8], limits: &DecodeLimits) -> Result<Self, DecodeError> {
        if data.len() > limits.max_attestation_object_len {
            return Err(DecodeError::TooLarge {
                len: data.len(),
                limit: limits.max_attestation_object_len,
            });
        }

        let value: Value = serde_cbor_2::from_slice(data).map_err(|e| {
            debug!(?e, "attestation object cbor");
            DecodeError::ParseCBORFailure(e)
        })?;
        let m = cbor_try_map!(value)?;

        let fmt = object_field(&m, "fmt").and_then(|v| cbor_try_string!(v))?;
        let format = AttestationFormat::try_from(fmt.as_str())?;

        let auth_data_bytes = object_field(&m, "authData")
            .and_then(|v| cbor_try_bytes!(v))?
            .clone();

        let att_stmt_map = object_field(&m, "attStmt").and_then(|v| cbor_try_map!(v))?;

        let auth_data = AuthenticatorData::from_slice(&auth_data_bytes, limits)?;
        let att_stmt = AttestationStatement::from_map(format, att_stmt_map)?;

        trace!(%format, "decoded attestation object");

        Ok(AttestationObject {
            format,
            auth_data,
            auth_data_bytes,
            att_stmt,
        })
    }
}
