//! # portal-client
//!
//! HTTP client for the portal backend.
//!
//! [`ApiClient::call`] issues one request and returns the decoded
//! [`Envelope`](portal_core::Envelope). It tracks whether any call is in
//! flight and remembers the last failure. There are no retries; a call can be
//! abandoned through a [`CancellationToken`](tokio_util::sync::CancellationToken)
//! in its [`CallOptions`].
//!
//! Typed wrappers for every backend endpoint live in [`endpoints`].

pub mod client;
pub mod endpoints;
pub mod error;
#[cfg(feature = "fake-backend")]
pub mod fake;

pub use client::{ApiClient, CallOptions};
pub use error::ClientError;
pub use reqwest::Method;
pub use tokio_util::sync::CancellationToken;
