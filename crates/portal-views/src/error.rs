use portal_core::{Role, Route};
use thiserror::Error;

/// Why a view ended up in its error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The view needs an identity the session does not have. No request was made.
    #[error("{} ID not found. Please log in again.", role.label())]
    Unauthenticated { role: Role },

    /// The primary fetch failed: transport text, server message, or fallback.
    #[error("{0}")]
    FetchFailed(String),
}

impl ViewError {
    /// Where the user can fix this error, if anywhere.
    #[must_use]
    pub const fn login_route(&self) -> Option<Route> {
        match self {
            Self::Unauthenticated { role } => Some(Route::login_for(*role)),
            Self::FetchFailed(_) => None,
        }
    }
}
