//! Cross-cutting error types for the portal client.
//!
//! Transport errors live in `portal-client`, storage errors in
//! `portal-session`. The CLI converges all of them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any portal crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The backend answered with a non-success envelope.
    #[error("{message}")]
    Rejected { message: String },

    /// A payload field was present but did not have the expected shape.
    #[error("Malformed field '{field}': {reason}")]
    Decode { field: String, reason: String },

    /// No route is registered for the path.
    #[error("No route for path '{0}'")]
    UnknownRoute(String),

    /// Input failed local validation before any request was made.
    #[error("{0}")]
    Validation(String),
}
