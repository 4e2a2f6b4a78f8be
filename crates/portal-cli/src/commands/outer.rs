use portal_client::endpoints::SummaryKind;
use portal_views::OuterDashboard;
use serde_json::json;

use crate::cli::root_commands::OuterArgs;
use crate::cli::subcommands::OuterCommands;
use crate::commands::shared::{ActionResponse, action_failed, ensure_loaded};
use crate::context::AppContext;
use crate::output::output;

/// Handle `portal outer`.
pub async fn handle(args: &OuterArgs, app: &AppContext) -> anyhow::Result<()> {
    let mut view = OuterDashboard::new(app.view.clone());
    view.mount().await;
    ensure_loaded(view.state())?;

    if let Some(course_id) = &args.expand {
        view.toggle(course_id).await;
        ensure_loaded(view.state())?;
    }

    let Some(action) = &args.action else {
        return output(&view.snapshot(), app.format);
    };

    let response = match action {
        OuterCommands::SummarizeText { module_name } => {
            let summary = view
                .summarize(SummaryKind::Text, module_name)
                .await
                .ok_or_else(|| action_failed(app))?;
            ActionResponse::new(
                "summarize-text",
                Some(module_name.as_str()),
                Some(json!(summary)),
                app,
            )
        }
        OuterCommands::SummarizeAudio { module_name } => {
            let summary = view
                .summarize(SummaryKind::Audio, module_name)
                .await
                .ok_or_else(|| action_failed(app))?;
            ActionResponse::new(
                "summarize-audio",
                Some(module_name.as_str()),
                Some(json!(summary)),
                app,
            )
        }
        OuterCommands::UploadFiles { links } => {
            view.open_doubt_solver();
            if !view.upload_files(&links.join("\n")).await {
                return Err(action_failed(app));
            }
            ActionResponse::new("upload-files", None, Some(json!(links)), app)
        }
        OuterCommands::Ask { prompt } => {
            view.open_doubt_solver();
            let answer = view.ask(prompt).await.ok_or_else(|| action_failed(app))?;
            ActionResponse::new("ask", Some(prompt.as_str()), Some(json!(answer)), app)
        }
    };
    output(&response, app.format)
}
