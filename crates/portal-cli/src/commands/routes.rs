use portal_core::{Role, Route};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RouteRow {
    path: &'static str,
    page: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    needs_login_as: Option<Role>,
}

/// Handle `portal routes`.
pub fn handle(format: OutputFormat) -> anyhow::Result<()> {
    let rows = Route::all()
        .map(|route| RouteRow {
            path: route.path(),
            page: route,
            needs_login_as: route.required_role(),
        })
        .collect::<Vec<_>>();
    output(&rows, format)
}
