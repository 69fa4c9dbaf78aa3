//! The extracted user record attached to error-report events.

use serde::{Deserialize, Serialize};

/// Reporting-ready summary of a request's user.
///
/// Every field is optional, and a record returned by the factory has at
/// least one field populated. Values are carried verbatim from the
/// authentication context, with no normalization. The record is built
/// fresh per extraction and owned entirely by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUser {
    /// Stable subject identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Contact email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Textual form of the remote peer address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl EventUser {
    /// True when every field is absent.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.username.is_none()
            && self.email.is_none()
            && self.ip_address.is_none()
    }
}
