//! Errors raised while loading portal settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `PORTAL_*` variable could not be merged or extracted.
    #[error("failed to read portal settings: {0}")]
    Figment(#[from] figment::Error),

    /// A setting parsed but is unusable, e.g. a non-http `api.base_url`.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
