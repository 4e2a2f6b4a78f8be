use portal_core::Route;
use portal_views::{Page, Router};
use serde::Serialize;
use serde_json::Value;

use crate::cli::root_commands::OpenArgs;
use crate::commands::shared::ensure_loaded;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FormPage {
    page: Route,
    fields: &'static [&'static str],
}

/// Handle `portal open`.
pub async fn handle(args: &OpenArgs, app: &AppContext) -> anyhow::Result<()> {
    let page = Router::open(&args.path, app.view.clone()).await?;
    output(&describe(&page)?, app.format)
}

/// What a mounted page shows: the fields of a form, or a dashboard's
/// loaded state.
fn describe(page: &Page) -> anyhow::Result<Value> {
    if let Some(state) = page.state() {
        ensure_loaded(state)?;
    }

    let value = match page {
        Page::Registration(_) => serde_json::to_value(FormPage {
            page: page.route(),
            fields: &["id", "email", "password", "confirm_password"],
        })?,
        Page::Login(_) => serde_json::to_value(FormPage {
            page: page.route(),
            fields: &["email", "password"],
        })?,
        Page::Outer(view) => serde_json::to_value(view.snapshot())?,
        Page::Student(view) => serde_json::to_value(view.snapshot())?,
        Page::Teacher(view) => serde_json::to_value(view.snapshot())?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use portal_client::endpoints::paths;
    use portal_client::fake::FakeBackend;
    use portal_core::Envelope;
    use portal_session::{MemorySessionStore, Session, TEACHER_ID_KEY};
    use portal_views::{RecordingNotifier, ViewContext};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn context(backend: &FakeBackend, entries: &[(&str, &str)]) -> ViewContext {
        let store = Arc::new(MemorySessionStore::with_entries(entries.iter().copied()));
        ViewContext::new(
            backend.client(),
            Session::load(store),
            Arc::new(RecordingNotifier::new()),
        )
    }

    #[tokio::test]
    async fn form_page_lists_its_fields() {
        let backend = FakeBackend::start();
        let page = Router::open("/teacher-login", context(&backend, &[]))
            .await
            .expect("route");

        let value = describe(&page).expect("describe");
        assert_eq!(
            value,
            json!({ "page": "teacher_login", "fields": ["email", "password"] })
        );
    }

    #[tokio::test]
    async fn teacher_dashboard_describes_courses_and_editors() {
        let backend = FakeBackend::start();
        backend.respond(
            paths::TEACHER_DETAILS,
            &Envelope::success().with(
                "courses",
                json!([{ "course_id": "C1", "course_name": "Algebra", "teacher_id": "T1" }]),
            ),
        );
        let page = Router::open("/teacher-dashboard", context(&backend, &[(TEACHER_ID_KEY, "T1")]))
            .await
            .expect("route");

        let value = describe(&page).expect("describe");
        assert_eq!(value["state"], "ready");
        assert_eq!(value["courses"][0]["course_name"], "Algebra");
        assert_eq!(value["ppt_editor"]["open"], false);
    }

    #[tokio::test]
    async fn dashboard_without_login_is_an_error_with_hint() {
        let backend = FakeBackend::start();
        let page = Router::open("/student-dashboard", context(&backend, &[]))
            .await
            .expect("route");

        let error = describe(&page).unwrap_err().to_string();
        assert!(error.starts_with("Student ID not found. Please log in again."));
        assert!(error.contains("portal login student"));
        assert_eq!(backend.request_count(), 0);
    }
}
