//! Routes a decoded attestation object to its format verifier, then resolves the verified
//! statement against the trust anchor store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use openssl::x509;
use uuid::Uuid;
use webauthn_rs_trust_store::{
    TrustAnchor, TrustAnchorIdentifier, TrustAnchorStore, TrustCategory,
};

use crate::attestation::{
    verify_android_key_attestation, verify_android_safetynet_attestation,
    verify_apple_anonymous_attestation, verify_attestation_ca_chain,
    verify_fidou2f_attestation, verify_packed_attestation, verify_tpm_attestation,
};
use crate::crypto::{compute_sha256, subject_key_identifier};
use crate::error::VerificationError;
use crate::interface::*;

/// The SHA-256 of the `clientDataJSON` exactly as the client sent it.
pub fn client_data_hash(client_data_json: &[u8]) -> [u8; 32] {
    compute_sha256(client_data_json)
}

/// Verify the attestation statement of a registration, and decide how far it can be trusted.
///
/// `client_data_hash` is the SHA-256 of the `clientDataJSON` for this registration, see
/// [client_data_hash]. When no `trust_store` is given every statement is classified by its
/// format alone. When a store is given, statements with a certificate chain are resolved against
/// it: an unknown authenticator is [TrustCategory::BasicSurrogate], never an error.
#[tracing::instrument(level = "debug", skip_all)]
pub fn verify_attestation(
    obj: &AttestationObject,
    client_data_hash: &[u8],
    trust_store: Option<&TrustAnchorStore>,
    config: &AttestationConfig,
) -> Result<VerifiedAttestation, VerificationError> {
    verify_attestation_at(obj, client_data_hash, trust_store, config, Utc::now())
}

pub(crate) fn verify_attestation_at(
    obj: &AttestationObject,
    client_data_hash: &[u8],
    trust_store: Option<&TrustAnchorStore>,
    config: &AttestationConfig,
    now: DateTime<Utc>,
) -> Result<VerifiedAttestation, VerificationError> {
    // Registration always carries a new credential.
    if !obj.auth_data.flags.attested_credential_data() {
        return Err(VerificationError::MissingAttestedCredentialData);
    }
    let acd = obj
        .auth_data
        .acd
        .as_ref()
        .ok_or(VerificationError::MissingAttestedCredentialData)?;

    debug!(format = %obj.format, "verifying attestation statement");

    let (nominal, evidence) = match &obj.att_stmt {
        AttestationStatement::Packed {
            alg,
            sig,
            x5c,
            ecdaa_key_id,
        } => verify_packed_attestation(
            acd,
            obj,
            client_data_hash,
            *alg,
            sig,
            x5c.as_deref(),
            ecdaa_key_id.as_deref(),
        )?,
        AttestationStatement::Tpm {
            ver,
            alg,
            sig,
            x5c,
            cert_info,
            pub_area,
        } => verify_tpm_attestation(
            acd,
            obj,
            client_data_hash,
            ver,
            *alg,
            sig,
            x5c,
            cert_info,
            pub_area,
        )?,
        AttestationStatement::AndroidKey { alg, sig, x5c } => {
            verify_android_key_attestation(acd, obj, client_data_hash, *alg, sig, x5c)?
        }
        AttestationStatement::AndroidSafetyNet { ver, response } => {
            verify_android_safetynet_attestation(obj, client_data_hash, ver, response, config, now)?
        }
        AttestationStatement::FIDOU2F { sig, x5c } => {
            verify_fidou2f_attestation(acd, obj, client_data_hash, sig, x5c)?
        }
        AttestationStatement::AppleAnonymous { x5c } => {
            verify_apple_anonymous_attestation(acd, obj, client_data_hash, x5c)?
        }
        AttestationStatement::None => (TrustCategory::None, AttestationEvidence::None),
    };

    let aaguid = Uuid::from_bytes(acd.aaguid);

    let (category, trust_anchor) = match (&evidence, trust_store) {
        (AttestationEvidence::Chain(chain), Some(store))
            if matches!(nominal, TrustCategory::BasicFull | TrustCategory::AttCa) =>
        {
            resolve_trust_anchor(nominal, aaguid, chain, store, config, now)?
        }
        _ => (nominal, None),
    };

    debug!(%category, %aaguid, anchored = trust_anchor.is_some(), "attestation verified");

    Ok(VerifiedAttestation {
        format: obj.format,
        category,
        evidence,
        trust_anchor,
        aaguid,
        credential_id: acd.credential_id.clone(),
        credential: acd.credential_pk.clone(),
        counter: obj.auth_data.counter,
    })
}

fn resolve_trust_anchor(
    nominal: TrustCategory,
    aaguid: Uuid,
    chain: &[x509::X509],
    store: &TrustAnchorStore,
    config: &AttestationConfig,
    now: DateTime<Utc>,
) -> Result<(TrustCategory, Option<Arc<TrustAnchor>>), VerificationError> {
    let identifier = if aaguid.is_nil() {
        let leaf = chain.first().ok_or(VerificationError::X5CMissing)?;
        TrustAnchorIdentifier::SubjectKeyIdentifier(subject_key_identifier(leaf)?)
    } else {
        TrustAnchorIdentifier::Aaguid(aaguid)
    };

    let anchor = match store.lookup(&identifier) {
        Some(anchor) => anchor,
        None => {
            debug!(%identifier, "no trust anchor for authenticator");
            return Ok((TrustCategory::BasicSurrogate, None));
        }
    };

    let store_config = store.config();

    match verify_attestation_ca_chain(
        chain,
        anchor.root_certificates(),
        config.danger_disable_certificate_time_checks,
    ) {
        Ok(()) => {}
        Err(VerificationError::AttestationChainNotTrusted(reason))
            if !store_config.validate_trust_anchor =>
        {
            warn!(%identifier, %reason, "attestation chain does not verify to its trust anchor");
            return Ok((TrustCategory::BasicSurrogate, None));
        }
        Err(e) => return Err(e),
    }

    if store_config.enforce_status {
        if let Some(status) = anchor.revocation_at(now.date_naive()) {
            warn!(%identifier, ?status, "authenticator model is revoked");
            return Err(VerificationError::AuthenticatorRevoked(status));
        }
    }

    if !anchor.permits(nominal) {
        debug!(%identifier, category = %nominal, "trust anchor does not permit category");
        return Err(VerificationError::AttestationTypeNotPermitted(nominal));
    }

    Ok((nominal, Some(anchor)))
}
