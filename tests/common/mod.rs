//! Common Test Utilities
//!
//! Shared fixtures for the user-extraction tests.

use std::net::{IpAddr, Ipv6Addr};
use std::sync::Once;

use event_user::{claim_type, Claim, ConnectionInfo, Identity, Principal, RequestContext};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a tracing subscriber once per test binary, so the extraction
/// trace events are visible under `--nocapture`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("event_user=trace"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}

/// Canonical subject identifier used across tests.
pub const SUBJECT_ID: &str = "927391237";

/// Canonical display name used across tests.
pub const USERNAME: &str = "test-user";

/// Canonical email address used across tests.
pub const EMAIL: &str = "test-user@example.com";

/// Remote peer used by the fixtures (IPv6 loopback, rendered as `::1`).
pub fn loopback() -> IpAddr {
    IpAddr::V6(Ipv6Addr::LOCALHOST)
}

/// Principal carrying the full claim set plus a named identity.
pub fn full_principal() -> Principal {
    Principal {
        identity: Some(Identity::named(USERNAME)),
        claims: vec![
            Claim::new(claim_type::EMAIL, EMAIL),
            Claim::new(claim_type::NAME, USERNAME),
            Claim::new(claim_type::SUBJECT, SUBJECT_ID),
        ],
    }
}

/// Context with the full principal and a loopback connection.
pub fn full_context() -> RequestContext {
    RequestContext::new()
        .with_principal(full_principal())
        .with_connection(ConnectionInfo::from_remote(loopback()))
}
