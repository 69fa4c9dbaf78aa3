//! Axum Extractor
//!
//! Assembles a [`RequestContext`] from request parts.
//!
//! The principal is whatever the application's authentication layer
//! deposited into request extensions after validating credentials; the
//! peer address comes from axum's `ConnectInfo`. Extraction cannot
//! reject: a request with neither simply yields an empty context.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use crate::domain::{ConnectionInfo, Principal, RequestContext};

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = parts.extensions.get::<Principal>().cloned();

        let connection = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| ConnectionInfo::from_remote(addr.ip()));

        Ok(RequestContext {
            principal,
            connection,
        })
    }
}
