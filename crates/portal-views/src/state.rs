use portal_core::{Identity, Route};
use serde::Serialize;

use crate::error::ViewError;

/// Page state driven by the primary fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Ready,
    Error(ViewError),
}

impl ViewState {
    #[must_use]
    pub const fn error(&self) -> Option<&ViewError> {
        match self {
            Self::Error(error) => Some(error),
            Self::Loading | Self::Ready => None,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Error(_) => "error",
        }
    }
}

/// An overlay with text content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Modal {
    pub open: bool,
    pub text: String,
}

impl Modal {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.open = true;
    }

    pub const fn close(&mut self) {
        self.open = false;
    }
}

/// What a form submission led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Local validation failed; nothing was sent.
    Invalid,
    /// The backend rejected the form or could not be reached.
    Failed,
    /// The view was unmounted before the reply arrived.
    Cancelled,
    Registered,
    LoggedIn {
        identity: Identity,
        navigate_to: Route,
    },
}

#[cfg(test)]
mod tests {
    use portal_core::Role;

    use super::*;

    #[test]
    fn labels_and_error_access() {
        assert_eq!(ViewState::Loading.label(), "loading");
        assert_eq!(ViewState::Ready.label(), "ready");
        let failed = ViewState::Error(ViewError::Unauthenticated { role: Role::Student });
        assert_eq!(failed.label(), "error");
        assert!(failed.error().is_some());
        assert!(ViewState::Ready.error().is_none());
    }

    #[test]
    fn modal_keeps_text_after_close() {
        let mut modal = Modal::default();
        modal.show("summary");
        assert!(modal.open);
        modal.close();
        assert!(!modal.open);
        assert_eq!(modal.text, "summary");
    }
}
