//! Authenticated principal and its identity.

use serde::{Deserialize, Serialize};

use super::claims::{first_of_type, Claim};

/// Minimal authentication handle, primarily a display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name reported by the authentication layer.
    pub name: Option<String>,
}

impl Identity {
    /// Identity with the given display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// The authenticated subject of a request.
///
/// The application's authentication layer deposits this into request
/// extensions after validating credentials; the user factory only reads
/// it. A principal may carry an identity, claims, both, or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Authentication handle, when the auth layer established one.
    pub identity: Option<Identity>,

    /// Claims asserted about the subject, in assertion order.
    pub claims: Vec<Claim>,
}

impl Principal {
    /// Principal with no identity and no claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the first claim of the given type, if any.
    pub fn first_claim(&self, claim_type: &str) -> Option<&str> {
        first_of_type(&self.claims, claim_type)
    }

    /// Display name from the identity, if any.
    pub fn identity_name(&self) -> Option<&str> {
        self.identity.as_ref().and_then(|identity| identity.name.as_deref())
    }
}
