//! User extraction from the request's authentication context.
//!
//! Each record field resolves through its own small pure function over
//! the claim sequence, identity, or connection info. The factory composes
//! them and applies the one overall rule: a record with nothing in it is
//! not a record.

use crate::domain::claims::{claim_type, first_of_type, Claim};
use crate::domain::{ConnectionInfo, EventUser, Identity, RequestContext};

/// Builds the user record attached to outgoing error-report events.
///
/// Implementations must be cheap and side-effect free: the factory runs
/// on the request path for every reported event, possibly from many
/// request-handling tasks at once.
pub trait UserFactory: Send + Sync {
    /// Extract a user record from the request context, or `None` when
    /// the context identifies nobody.
    fn create(&self, context: &RequestContext) -> Option<EventUser>;
}

/// Stock [`UserFactory`] reading the principal's claims and identity
/// plus the connection's peer address.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUserFactory;

impl UserFactory for DefaultUserFactory {
    fn create(&self, context: &RequestContext) -> Option<EventUser> {
        let principal = match context.principal.as_ref() {
            Some(principal) => principal,
            None => {
                tracing::trace!("request carries no principal, skipping user extraction");
                return None;
            }
        };

        let ip = ip_address(context.connection.as_ref());
        if principal.identity.is_none() && principal.claims.is_empty() && ip.is_none() {
            tracing::trace!("principal carries no identity, claims or peer address");
            return None;
        }

        let user = EventUser {
            id: subject_id(&principal.claims),
            username: username(&principal.claims, principal.identity.as_ref()),
            email: email(&principal.claims),
            ip_address: ip,
        };

        if user.is_empty() {
            tracing::trace!("authentication context produced no user fields");
            return None;
        }

        Some(user)
    }
}

/// Stable subject identifier from the claim sequence.
fn subject_id(claims: &[Claim]) -> Option<String> {
    first_of_type(claims, claim_type::SUBJECT).map(str::to_owned)
}

/// Display name: the name claim wins, the identity is the fallback.
fn username(claims: &[Claim], identity: Option<&Identity>) -> Option<String> {
    first_of_type(claims, claim_type::NAME)
        .or_else(|| identity.and_then(|identity| identity.name.as_deref()))
        .map(str::to_owned)
}

/// Contact address from the claim sequence.
fn email(claims: &[Claim]) -> Option<String> {
    first_of_type(claims, claim_type::EMAIL).map(str::to_owned)
}

/// Textual peer address, when the connection exposes one.
fn ip_address(connection: Option<&ConnectionInfo>) -> Option<String> {
    connection
        .and_then(|connection| connection.remote_addr)
        .map(|addr| addr.to_string())
}
