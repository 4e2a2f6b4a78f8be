//! Session store location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session file. Empty means `~/.portal/session.json`.
    #[serde(default)]
    pub path: String,

    /// Keep the session in memory only (nothing survives the process).
    #[serde(default)]
    pub ephemeral: bool,
}

impl SessionConfig {
    /// Explicitly configured session file, if any.
    #[must_use]
    pub fn path_override(&self) -> Option<PathBuf> {
        let trimmed = self.path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
