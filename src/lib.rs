//! # Event User
//!
//! This crate extracts a user identity record (id, username, email,
//! IP address) from an incoming web request's authentication context,
//! for attachment to error-report events.
//!
//! Extraction is a pure read over a [`RequestContext`]: each field
//! resolves through its own fallback chain, and when nothing would be
//! populated the factory yields no record at all. Every missing input
//! (anonymous request, empty claim set, unknown peer address) is
//! ordinary absence, never an error.
//!
//! ## Module Structure
//!
//! ```text
//! event_user/
//! +-- domain/    Authentication-context data model and the user record
//! +-- extract    Axum bridge assembling a RequestContext from a request
//! +-- factory    UserFactory trait and the stock implementation
//! ```

// Domain layer - data model
pub mod domain;

// Axum integration - request parts to RequestContext
pub mod extract;

// User extraction
pub mod factory;

// Re-export the public surface at the crate root
pub use domain::{claim_type, Claim, ConnectionInfo, EventUser, Identity, Principal, RequestContext};
pub use factory::{DefaultUserFactory, UserFactory};
