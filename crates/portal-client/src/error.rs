//! Client error types.

use thiserror::Error;

/// Everything that can go wrong between dispatch and a decoded envelope.
///
/// A decoded envelope with a failure status is NOT an error at this layer;
/// callers decide how to present it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, TLS, or protocol failure from the HTTP stack.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response whose body is not an envelope.
    #[error("Request failed with status code {status}")]
    Http { status: u16, body: String },

    /// 2xx response whose body is not an envelope.
    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid base URL '{0}'")]
    InvalidUrl(String),

    /// The call's cancellation token fired before the response arrived.
    #[error("request cancelled")]
    Cancelled,
}

impl ClientError {
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
