use portal_client::endpoints::SummaryKind;
use portal_views::StudentDashboard;
use serde_json::json;

use crate::cli::root_commands::StudentArgs;
use crate::cli::subcommands::StudentCommands;
use crate::commands::shared::{ActionResponse, action_failed, ensure_loaded};
use crate::context::AppContext;
use crate::output::output;

/// Handle `portal student`.
pub async fn handle(args: &StudentArgs, app: &AppContext) -> anyhow::Result<()> {
    let mut view = StudentDashboard::new(app.view.clone());
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
        StudentCommands::QuizLink { module_name, open } => {
            let link = view
                .attend_quiz(module_name)
                .await
                .ok_or_else(|| action_failed(app))?;
            if *open {
                if let Err(error) = open::that(&link) {
                    tracing::warn!(%error, link = %link, "failed to open quiz in browser");
                }
            }
            ActionResponse::new("quiz-link", Some(module_name.as_str()), Some(json!(link)), app)
        }
        StudentCommands::SummarizeText { module_name } => {
            summarize(&mut view, SummaryKind::Text, module_name, app).await?;
            ActionResponse::new(
                "summarize-text",
                Some(module_name.as_str()),
                Some(json!(view.text_summary)),
                app,
            )
        }
        StudentCommands::SummarizeAudio { module_name } => {
            summarize(&mut view, SummaryKind::Audio, module_name, app).await?;
            ActionResponse::new(
                "summarize-audio",
                Some(module_name.as_str()),
                Some(json!(view.audio_summary)),
                app,
            )
        }
    };
    output(&response, app.format)
}

async fn summarize(
    view: &mut StudentDashboard,
    kind: SummaryKind,
    module_name: &str,
    app: &AppContext,
) -> anyhow::Result<()> {
    if view.summarize(kind, module_name).await {
        Ok(())
    } else {
        Err(action_failed(app))
    }
}
