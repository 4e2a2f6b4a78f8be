use portal_core::Role;
use portal_views::registration::REGISTRATION_SUCCESSFUL;
use portal_views::{FormOutcome, RegistrationView};
use serde::Serialize;

use crate::cli::root_commands::RegisterArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RegisterResponse {
    role: Role,
    id: String,
    message: &'static str,
}

/// Handle `portal register`.
pub async fn handle(args: &RegisterArgs, app: &AppContext) -> anyhow::Result<()> {
    let role = Role::from(args.role);
    let mut view = RegistrationView::new(app.view.clone(), role);
    view.form.id.clone_from(&args.id);
    view.form.email.clone_from(&args.email);
    view.form.password.clone_from(&args.password);
    view.form.confirm_password.clone_from(&args.confirm_password);

    match view.submit().await {
        FormOutcome::Registered => output(
            &RegisterResponse {
                role,
                id: args.id.clone(),
                message: REGISTRATION_SUCCESSFUL,
            },
            app.format,
        ),
        FormOutcome::Cancelled => anyhow::bail!("registration cancelled"),
        _ => anyhow::bail!("{}", view.error().unwrap_or("Registration failed")),
    }
}
