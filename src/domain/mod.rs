//! # Domain Layer
//!
//! The data model the user factory reads and produces. It is independent
//! of any web framework; the axum bridge lives in [`crate::extract`].
//!
//! ## Structure
//!
//! - **claims**: Claim assertions and the recognized claim types
//! - **principal**: Authenticated subject and its identity
//! - **connection**: Transport-level connection information
//! - **context**: Per-request view handed to the factory
//! - **user**: The extracted record attached to events

pub mod claims;
pub mod connection;
pub mod context;
pub mod principal;
pub mod user;

// Re-export commonly used types
pub use claims::{claim_type, Claim};
pub use connection::ConnectionInfo;
pub use context::RequestContext;
pub use principal::{Identity, Principal};
pub use user::EventUser;
