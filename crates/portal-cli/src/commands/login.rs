use portal_core::{Role, Route};
use portal_views::{FormOutcome, LoginView};
use serde::Serialize;

use crate::cli::root_commands::LoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LoginResponse {
    role: Role,
    id: String,
    navigate_to: &'static str,
}

/// Handle `portal login`.
pub async fn handle(args: &LoginArgs, app: &AppContext) -> anyhow::Result<()> {
    let response = login(args, app).await?;
    output(&response, app.format)
}

async fn login(args: &LoginArgs, app: &AppContext) -> anyhow::Result<LoginResponse> {
    let role = Role::from(args.role);
    let mut view = LoginView::new(app.view.clone(), role);
    view.form.email.clone_from(&args.email);
    view.form.password.clone_from(&args.password);

    match view.submit().await {
        FormOutcome::LoggedIn {
            identity,
            navigate_to,
        } => Ok(LoginResponse {
            role,
            id: identity.id,
            navigate_to: Route::path(navigate_to),
        }),
        FormOutcome::Cancelled => anyhow::bail!("login cancelled"),
        _ => anyhow::bail!("{}", view.error().unwrap_or("Login failed")),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use portal_client::endpoints::paths;
    use portal_client::fake::FakeBackend;
    use portal_core::Envelope;
    use portal_session::{MemorySessionStore, STUDENT_ID_KEY, Session, SessionStore};
    use portal_views::{RecordingNotifier, ViewContext};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::root_commands::RoleArg;

    fn app_with(backend: &FakeBackend, store: Arc<MemorySessionStore>) -> AppContext {
        let notifier = Arc::new(RecordingNotifier::new());
        let view = ViewContext::new(backend.client(), Session::load(store), notifier.clone());
        AppContext::with_view(view, notifier)
    }

    fn student_login(password: &str) -> LoginArgs {
        LoginArgs {
            role: RoleArg::Student,
            email: "a@b.com".into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn login_stores_identity_and_reports_landing_page() {
        let backend = FakeBackend::start();
        backend.respond(
            paths::LOGIN_STUDENT,
            &Envelope::success().with("student_id", "S1"),
        );
        let store = Arc::new(MemorySessionStore::new());
        let app = app_with(&backend, store.clone());

        let response = login(&student_login("x"), &app).await.expect("login");

        assert_eq!(response.role, Role::Student);
        assert_eq!(response.id, "S1");
        assert_eq!(response.navigate_to, "/outer-dashboard");
        assert_eq!(store.get(STUDENT_ID_KEY).as_deref(), Some("S1"));
    }

    #[tokio::test]
    async fn rejected_login_reports_server_message_and_keeps_session() {
        let backend = FakeBackend::start();
        backend.respond(paths::LOGIN_STUDENT, &Envelope::failure("Invalid credentials"));
        let store = Arc::new(MemorySessionStore::with_entries([(STUDENT_ID_KEY, "S0")]));
        let app = app_with(&backend, store.clone());

        let error = login(&student_login("bad"), &app).await.unwrap_err();

        assert_eq!(error.to_string(), "Invalid credentials");
        assert_eq!(store.get(STUDENT_ID_KEY).as_deref(), Some("S0"));
    }
}
