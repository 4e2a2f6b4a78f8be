use portal_core::Route;
use portal_views::{ViewError, ViewState};
use serde::Serialize;
use serde_json::Value;

use crate::context::AppContext;

/// Result of a dashboard action, with the notifications it raised.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    pub notifications: Vec<String>,
}

impl ActionResponse {
    pub fn new(
        action: &'static str,
        target: Option<&str>,
        result: Option<Value>,
        app: &AppContext,
    ) -> Self {
        Self {
            action,
            target: target.map(str::to_string),
            result,
            notifications: app.notifications(),
        }
    }
}

/// Fail unless the page finished loading. A missing identity names the
/// login command that fixes it.
pub fn ensure_loaded(state: &ViewState) -> anyhow::Result<()> {
    match state {
        ViewState::Ready => Ok(()),
        ViewState::Loading => anyhow::bail!("request cancelled before the page loaded"),
        ViewState::Error(error @ ViewError::Unauthenticated { role }) => {
            let route = Route::login_for(*role);
            anyhow::bail!("{error}\nhint: run `portal login {role}` (page {route})")
        }
        ViewState::Error(error) => anyhow::bail!("{error}"),
    }
}

/// Error for an action that did not complete: the last notification, which
/// carries the failure text.
pub fn action_failed(app: &AppContext) -> anyhow::Error {
    app.notifier.last().map_or_else(
        || anyhow::anyhow!("request cancelled"),
        |message| anyhow::anyhow!(message),
    )
}

#[cfg(test)]
mod tests {
    use portal_core::Role;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ready_state_passes() {
        assert!(ensure_loaded(&ViewState::Ready).is_ok());
    }

    #[test]
    fn unauthenticated_state_points_to_login() {
        let error = ensure_loaded(&ViewState::Error(ViewError::Unauthenticated {
            role: Role::Teacher,
        }))
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Teacher ID not found. Please log in again.\nhint: run `portal login teacher` (page /teacher-login)"
        );
    }

    #[test]
    fn fetch_failure_is_passed_through() {
        let error = ensure_loaded(&ViewState::Error(ViewError::FetchFailed(
            "Failed to fetch courses.".into(),
        )))
        .unwrap_err();
        assert_eq!(error.to_string(), "Failed to fetch courses.");
    }
}
