//! Per-request view of the authentication context.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use super::connection::ConnectionInfo;
use super::principal::Principal;

/// The slice of an incoming request the user factory reads.
///
/// Both parts are optional: anonymous requests carry no principal, and
/// not every transport exposes connection details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Authenticated principal, when the request carries one.
    pub principal: Option<Principal>,

    /// Connection the request arrived on, when known.
    pub connection: Option<ConnectionInfo>,
}

impl RequestContext {
    /// An empty context: no principal, no connection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an authenticated principal.
    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Attach connection information.
    pub fn with_connection(mut self, connection: ConnectionInfo) -> Self {
        self.connection = Some(connection);
        self
    }

    /// Remote peer address, when both the connection and its address are known.
    pub fn remote_addr(&self) -> Option<IpAddr> {
        self.connection.and_then(|connection| connection.remote_addr)
    }
}
