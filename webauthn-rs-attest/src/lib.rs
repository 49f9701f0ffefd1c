//! Webauthn-rs Attest - Attestation verification for Webauthn registrations
//!
//! During registration an authenticator may sign its new credential with an attestation key,
//! proving (to a degree) what kind of device it is. This crate decodes the attestation object,
//! verifies the statement for each of the defined formats, and resolves the result against a
//! [trust::TrustAnchorStore] of authenticator metadata.
//!
//! ```no_run
//! use webauthn_rs_attest::*;
//!
//! # fn example(attestation_object: &[u8], client_data_json: &[u8]) -> Result<(), VerificationError> {
//! let config = AttestationConfig::default();
//! let obj = AttestationObject::from_slice(attestation_object, &config.limits)?;
//! let hash = client_data_hash(client_data_json);
//! let verified = verify_attestation(&obj, &hash, None, &config)?;
//! println!("{} attestation from {}", verified.category, verified.aaguid);
//! # Ok(())
//! # }
//! ```
//!
//! Relying party policy (which categories to accept, user verification requirements) is left to
//! the caller. Assertions are not verified here, although [AuthenticatorRecord] can track the
//! signature counter across them.

#![deny(warnings)]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

#[macro_use]
extern crate tracing;

#[macro_use]
mod macros;

mod attestation;
mod core;
mod counter;
mod crypto;
mod decode;
mod error;
mod interface;
mod tpm;

#[cfg(test)]
mod test_data;

pub use webauthn_rs_trust_store as trust;

pub use crate::core::{client_data_hash, verify_attestation};
pub use crate::counter::{AuthenticatorRecord, CounterOutcome};
pub use crate::crypto::{compute_sha256, subject_key_identifier};
pub use crate::error::{DecodeError, VerificationError};
pub use crate::interface::*;
