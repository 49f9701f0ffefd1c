//! Signature counter tracking for registered authenticators.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the relying party knows about a registered authenticator between ceremonies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatorRecord {
    /// The model identifier reported at registration.
    pub aaguid: Uuid,
    /// The last accepted signature counter.
    pub sign_count: u32,
    /// Set once the counter has been seen to go backwards. It is never cleared implicitly.
    pub clone_warning: bool,
}

/// The result of [AuthenticatorRecord::update_counter].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterOutcome {
    /// True if the ceremony should be rejected.
    pub reject: bool,
}

impl AuthenticatorRecord {
    /// Create a record from a freshly verified registration.
    pub fn new(aaguid: Uuid, sign_count: u32) -> Self {
        AuthenticatorRecord {
            aaguid,
            sign_count,
            clone_warning: false,
        }
    }

    /// Record the counter observed in a new assertion.
    ///
    /// Authenticators that do not implement a counter always report zero, which is accepted.
    /// Otherwise the counter must strictly increase. A counter that does not increase (including
    /// one that wrapped) marks the authenticator as possibly cloned and leaves the stored
    /// counter untouched.
    pub fn update_counter(&mut self, observed: u32) -> CounterOutcome {
        if observed == 0 && self.sign_count == 0 {
            return CounterOutcome { reject: false };
        }

        if observed > self.sign_count {
            self.sign_count = observed;
            CounterOutcome { reject: false }
        } else {
            warn!(
                aaguid = %self.aaguid,
                stored = self.sign_count,
                observed,
                "signature counter did not increase, authenticator may be cloned"
            );
            self.clone_warning = true;
            CounterOutcome { reject: true }
        }
    }

    /// True once the counter has ever gone backwards.
    pub fn is_clone_suspected(&self) -> bool {
        self.clone_warning
    }

    /// Clear the clone warning after an operator has investigated it.
    pub fn clear_clone_warning(&mut self) {
        self.clone_warning = false;
    }
}
