//! Transport-level connection information.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// Information about the connection a request arrived on.
///
/// Some transports (in-process tests, unix sockets) expose no peer
/// address, so the address is optional even when the connection is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    /// Remote peer address, when the transport exposes one.
    pub remote_addr: Option<IpAddr>,
}

impl ConnectionInfo {
    /// Connection info for the given peer address.
    pub fn from_remote(addr: IpAddr) -> Self {
        Self {
            remote_addr: Some(addr),
        }
    }
}
