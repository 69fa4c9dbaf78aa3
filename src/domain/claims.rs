//! Claims asserted about an authenticated subject.

use serde::{Deserialize, Serialize};

/// Claim types recognized by the user factory.
///
/// These are the JWT registered claim names, matching what token-based
/// authentication layers put on the wire.
pub mod claim_type {
    /// Stable subject identifier.
    pub const SUBJECT: &str = "sub";

    /// Display name.
    pub const NAME: &str = "name";

    /// Contact email address.
    pub const EMAIL: &str = "email";
}

/// A typed key/value assertion about an authenticated subject.
///
/// Multiple claims may share a type. Sequence order is significant:
/// lookups take the first match and never reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim type (e.g. [`claim_type::EMAIL`]).
    #[serde(rename = "type")]
    pub claim_type: String,

    /// Claim value, carried verbatim from the authentication layer.
    pub value: String,
}

impl Claim {
    /// Create a claim from a type and value.
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// Value of the first claim of the given type in sequence order, if any.
pub fn first_of_type<'a>(claims: &'a [Claim], claim_type: &str) -> Option<&'a str> {
    claims
        .iter()
        .find(|claim| claim.claim_type == claim_type)
        .map(|claim| claim.value.as_str())
}
