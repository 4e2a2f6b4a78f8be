use portal_core::Role;
use serde::Serialize;

use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SessionResponse {
    api_url: String,
    /// Session file, absent for an in-memory session.
    path: Option<String>,
    student_id: Option<String>,
    teacher_id: Option<String>,
    selected_module: Option<String>,
}

/// Handle `portal session`.
pub fn handle(app: &AppContext) -> anyhow::Result<()> {
    let session = &app.view.session;
    let response = SessionResponse {
        api_url: app.config.api.base_url.clone(),
        path: app
            .session_path
            .as_ref()
            .map(|path| path.display().to_string()),
        student_id: session.identity(Role::Student).map(|identity| identity.id),
        teacher_id: session.identity(Role::Teacher).map(|identity| identity.id),
        selected_module: session.selected_module().map(str::to_string),
    };
    output(&response, app.format)
}
