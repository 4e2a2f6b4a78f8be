use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("home directory not found; cannot locate the session file")]
    HomeNotFound,

    #[error("session store I/O error at {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },

    #[error("session file {} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },
}
