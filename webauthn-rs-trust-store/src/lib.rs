//! Webauthn-rs Trust Store - Attestation trust anchors for Webauthn
//!
//! Attestation certificate chains presented by an authenticator during registration are only
//! meaningful if they can be tied back to a root that you trust. This crate holds those roots,
//! keyed by the authenticator model (AAGUID) or by the subject key identifier of the attestation
//! certificate, along with the status reports published for that model.
//!
//! The store is built from already parsed metadata entries. Fetching and verifying a metadata
//! BLOB is the concern of the caller. A [TrustAnchorStore] may optionally be backed by a cache
//! file, so that the last good metadata snapshot survives a restart.

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

mod cache;
mod config;
mod entry;
mod error;
mod store;

pub use crate::cache::CacheFile;
pub use crate::config::TrustStoreConfig;
pub use crate::entry::{
    AuthenticatorStatus, StatusReport, TrustAnchor, TrustAnchorEntry, TrustAnchorIdentifier,
    TrustCategory,
};
pub use crate::error::{EntryRejection, TrustStoreError};
pub use crate::store::{LoadReport, TrustAnchorSnapshot, TrustAnchorStore};
