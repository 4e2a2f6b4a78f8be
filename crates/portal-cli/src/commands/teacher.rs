use portal_client::endpoints::NewModule;
use portal_core::entities::LinkKind;
use portal_views::TeacherDashboard;
use serde_json::json;

use crate::cli::root_commands::TeacherArgs;
use crate::cli::subcommands::{LinkArgs, TeacherCommands};
use crate::commands::shared::{ActionResponse, action_failed, ensure_loaded};
use crate::context::AppContext;
use crate::output::output;

/// Handle `portal teacher`.
pub async fn handle(args: &TeacherArgs, app: &AppContext) -> anyhow::Result<()> {
    let mut view = TeacherDashboard::new(app.view.clone());
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
        TeacherCommands::GenerateQuiz { module_name } => {
            if !view.generate_quiz(module_name).await {
                return Err(action_failed(app));
            }
            ActionResponse::new(
                "generate-quiz",
                Some(module_name.as_str()),
                Some(json!(view.quiz)),
                app,
            )
        }
        TeacherCommands::AddPpt(link) => update_link(&mut view, LinkKind::Ppt, link, app).await?,
        TeacherCommands::AddAudio(link) => {
            update_link(&mut view, LinkKind::Audio, link, app).await?
        }
        TeacherCommands::UploadQuizLink(link) => {
            update_link(&mut view, LinkKind::Quiz, link, app).await?
        }
        TeacherCommands::AddCourse {
            course_id,
            course_name,
        } => {
            if !view.add_course(course_id, course_name).await {
                return Err(action_failed(app));
            }
            let course = view.courses().courses().last().cloned();
            ActionResponse::new("add-course", Some(course_id.as_str()), Some(json!(course)), app)
        }
        TeacherCommands::AddModule {
            course_id,
            module_name,
            ppt_link,
            audio_link,
        } => {
            let module = NewModule {
                course_id: course_id.clone(),
                module_name: module_name.clone(),
                ppt_link: ppt_link.clone(),
                audio_link: audio_link.clone(),
            };
            if !view.add_module(&module).await {
                return Err(action_failed(app));
            }
            ActionResponse::new("add-module", Some(module_name.as_str()), None, app)
        }
        TeacherCommands::CourseDetails { course_id } => {
            let course = view
                .course_details(course_id)
                .await
                .ok_or_else(|| action_failed(app))?;
            ActionResponse::new(
                "course-details",
                Some(course_id.as_str()),
                Some(json!(course)),
                app,
            )
        }
        TeacherCommands::ConvertPpt { ppt_link } => {
            let text = view
                .convert_ppt(ppt_link)
                .await
                .ok_or_else(|| action_failed(app))?;
            ActionResponse::new("convert-ppt", Some(ppt_link.as_str()), Some(json!(text)), app)
        }
    };
    output(&response, app.format)
}

/// Drive one link editor: expand the course if asked, select the module,
/// type the link and submit.
async fn update_link(
    view: &mut TeacherDashboard,
    kind: LinkKind,
    args: &LinkArgs,
    app: &AppContext,
) -> anyhow::Result<ActionResponse> {
    if let Some(course_id) = &args.course {
        if view.courses().expanded() != Some(course_id.as_str()) {
            view.toggle(course_id).await;
            ensure_loaded(view.state())?;
        }
    }

    view.open_link_editor(kind, &args.module_name);
    view.set_link_input(kind, &args.link);
    if !view.submit_link(kind).await {
        return Err(action_failed(app));
    }

    let module = view
        .courses()
        .modules()
        .iter()
        .find(|module| module.module_name == args.module_name)
        .cloned();
    let action = match kind {
        LinkKind::Ppt => "add-ppt",
        LinkKind::Audio => "add-audio",
        LinkKind::Quiz => "upload-quiz-link",
    };
    Ok(ActionResponse::new(
        action,
        Some(args.module_name.as_str()),
        module.map(|module| json!(module)),
        app,
    ))
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

    use super::*;

    fn teacher_app(backend: &FakeBackend) -> AppContext {
        let store = Arc::new(MemorySessionStore::with_entries([(TEACHER_ID_KEY, "T1")]));
        let notifier = Arc::new(RecordingNotifier::new());
        let view = ViewContext::new(backend.client(), Session::load(store), notifier.clone());
        AppContext::with_view(view, notifier)
    }

    fn serve_course_with_module(backend: &FakeBackend) {
        backend.respond(
            paths::TEACHER_DETAILS,
            &Envelope::success().with(
                "courses",
                json!([{ "course_id": "C1", "course_name": "Algebra", "teacher_id": "T1" }]),
            ),
        );
        backend.respond(
            paths::ALL_MODULES,
            &Envelope::success().with(
                "modules",
                json!([{ "module_name": "Week 1", "content": { "audio_link": "old.mp3" } }]),
            ),
        );
    }

    #[tokio::test]
    async fn link_update_with_course_shows_patched_module() {
        let backend = FakeBackend::start();
        serve_course_with_module(&backend);
        backend.respond(paths::ADD_AUDIO, &Envelope::success());
        let app = teacher_app(&backend);
        let mut view = TeacherDashboard::new(app.view.clone());
        view.mount().await;

        let args = LinkArgs {
            module_name: "Week 1".into(),
            link: "new.mp3".into(),
            course: Some("C1".into()),
        };
        let response = update_link(&mut view, LinkKind::Audio, &args, &app)
            .await
            .expect("update");

        assert_eq!(response.action, "add-audio");
        assert_eq!(response.target.as_deref(), Some("Week 1"));
        let module = response.result.expect("module listed");
        assert_eq!(module["content"]["audio_link"], "new.mp3");
        assert_eq!(
            response.notifications,
            vec!["Audio link updated successfully.".to_string()]
        );
        assert_eq!(
            backend.requests_to(paths::ADD_AUDIO)[0].body,
            json!({ "module_name": "Week 1", "audio_link": "new.mp3" })
        );
    }

    #[tokio::test]
    async fn rejected_link_update_fails_with_notification_text() {
        let backend = FakeBackend::start();
        serve_course_with_module(&backend);
        backend.respond(paths::UPLOAD_QUIZ_LINK, &Envelope::failure("Module not found"));
        let app = teacher_app(&backend);
        let mut view = TeacherDashboard::new(app.view.clone());
        view.mount().await;

        let args = LinkArgs {
            module_name: "Week 1".into(),
            link: "https://quiz".into(),
            course: Some("C1".into()),
        };
        let error = update_link(&mut view, LinkKind::Quiz, &args, &app)
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "Failed to update Quiz link: Module not found");
        assert_eq!(backend.requests_to(paths::ALL_MODULES).len(), 1);
    }
}
