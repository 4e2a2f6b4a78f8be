//! Teacher course page: quiz generation, link maintenance, and course and
//! module authoring.

use portal_client::endpoints::NewModule;
use portal_core::entities::LinkKind;
use portal_core::{Course, Module, ModuleContent, Role};
use serde::Serialize;

use crate::context::{ActionTexts, Lifetime, ViewContext};
use crate::courses::{CourseBrowser, DashboardSnapshot};
use crate::error::ViewError;
use crate::state::{Modal, ViewState};

pub const MISSING_COURSE_FIELDS: &str = "Please enter a course ID and name.";
pub const MISSING_MODULE_FIELDS: &str = "Please enter a course ID and module name.";
pub const COURSE_ADDED: &str = "Course added successfully.";
pub const MODULE_ADDED: &str = "Module added successfully.";

const GENERATE_QUIZ: ActionTexts = ActionTexts {
    failed: "Failed to generate quiz",
    error: "Error generating quiz",
};
const ADD_COURSE: ActionTexts = ActionTexts {
    failed: "Failed to add course",
    error: "Error adding course",
};
const ADD_MODULE: ActionTexts = ActionTexts {
    failed: "Failed to add module",
    error: "Error adding module",
};
const COURSE_DETAILS: ActionTexts = ActionTexts {
    failed: "Failed to fetch course details",
    error: "Error fetching course details",
};
const CONVERT_PPT: ActionTexts = ActionTexts {
    failed: "Failed to convert PPT",
    error: "Error converting PPT",
};

const fn link_update_texts(kind: LinkKind) -> ActionTexts {
    match kind {
        LinkKind::Ppt => ActionTexts {
            failed: "Failed to update PPT link",
            error: "Error updating PPT link",
        },
        LinkKind::Audio => ActionTexts {
            failed: "Failed to update Audio link",
            error: "Error updating Audio link",
        },
        LinkKind::Quiz => ActionTexts {
            failed: "Failed to update Quiz link",
            error: "Error updating Quiz link",
        },
    }
}

/// Notification for a blank link or a missing module selection.
#[must_use]
pub fn invalid_link_message(kind: LinkKind) -> String {
    format!("Please enter a valid {} link.", kind.label())
}

/// State of one "update link" modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkEditor {
    pub open: bool,
    pub module_name: Option<String>,
    pub input: String,
}

impl LinkEditor {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherSnapshot {
    #[serde(flatten)]
    pub dashboard: DashboardSnapshot,
    pub quiz: Modal,
    pub ppt_editor: LinkEditor,
    pub audio_editor: LinkEditor,
    pub quiz_link_editor: LinkEditor,
}

#[derive(Debug)]
pub struct TeacherDashboard {
    ctx: ViewContext,
    lifetime: Lifetime,
    courses: CourseBrowser,
    pub quiz: Modal,
    ppt_editor: LinkEditor,
    audio_editor: LinkEditor,
    quiz_link_editor: LinkEditor,
}

impl TeacherDashboard {
    #[must_use]
    pub fn new(ctx: ViewContext) -> Self {
        let lifetime = ctx.lifetime();
        Self {
            ctx,
            lifetime,
            courses: CourseBrowser::new(Role::Teacher),
            quiz: Modal::default(),
            ppt_editor: LinkEditor::default(),
            audio_editor: LinkEditor::default(),
            quiz_link_editor: LinkEditor::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.courses.load(&self.ctx, &self.lifetime).await;
    }

    pub fn unmount(&self) {
        self.lifetime.end();
    }

    #[must_use]
    pub const fn lifetime(&self) -> &Lifetime {
        &self.lifetime
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        self.courses.state()
    }

    #[must_use]
    pub const fn courses(&self) -> &CourseBrowser {
        &self.courses
    }

    #[must_use]
    pub fn snapshot(&self) -> TeacherSnapshot {
        TeacherSnapshot {
            dashboard: self.courses.snapshot(),
            quiz: self.quiz.clone(),
            ppt_editor: self.ppt_editor.clone(),
            audio_editor: self.audio_editor.clone(),
            quiz_link_editor: self.quiz_link_editor.clone(),
        }
    }

    pub async fn toggle(&mut self, course_id: &str) {
        self.courses.toggle(course_id, &self.ctx, &self.lifetime).await;
    }

    /// Generate a quiz for a module and show it in the quiz modal.
    pub async fn generate_quiz(&mut self, module_name: &str) -> bool {
        let result = self
            .ctx
            .client
            .generate_quiz(module_name, self.lifetime.options())
            .await;
        let Some(envelope) = self.ctx.settle(&self.lifetime, result, GENERATE_QUIZ) else {
            return false;
        };
        self.quiz.show(envelope.text("quiz").unwrap_or_default());
        true
    }

    pub const fn close_quiz(&mut self) {
        self.quiz.close();
    }

    #[must_use]
    pub const fn editor(&self, kind: LinkKind) -> &LinkEditor {
        match kind {
            LinkKind::Ppt => &self.ppt_editor,
            LinkKind::Audio => &self.audio_editor,
            LinkKind::Quiz => &self.quiz_link_editor,
        }
    }

    const fn editor_mut(&mut self, kind: LinkKind) -> &mut LinkEditor {
        match kind {
            LinkKind::Ppt => &mut self.ppt_editor,
            LinkKind::Audio => &mut self.audio_editor,
            LinkKind::Quiz => &mut self.quiz_link_editor,
        }
    }

    /// Open the `kind` editor for a module.
    pub fn open_link_editor(&mut self, kind: LinkKind, module_name: &str) {
        let editor = self.editor_mut(kind);
        editor.module_name = Some(module_name.to_string());
        editor.open = true;
    }

    pub fn set_link_input(&mut self, kind: LinkKind, input: &str) {
        self.editor_mut(kind).input = input.to_string();
    }

    /// Close the editor without sending anything.
    pub fn cancel_link_editor(&mut self, kind: LinkKind) {
        self.editor_mut(kind).reset();
    }

    /// Send the editor's link. On success the module in the local list is
    /// patched and the editor closes.
    pub async fn submit_link(&mut self, kind: LinkKind) -> bool {
        let editor = self.editor(kind);
        let link = editor.input.trim().to_string();
        let module_name = match &editor.module_name {
            Some(name) if !link.is_empty() => name.clone(),
            _ => {
                self.ctx.notify(&invalid_link_message(kind));
                return false;
            }
        };

        let result = self
            .ctx
            .client
            .update_link(kind, &module_name, &link, self.lifetime.options())
            .await;
        if self
            .ctx
            .settle(&self.lifetime, result, link_update_texts(kind))
            .is_none()
        {
            return false;
        }

        if let Some(module) = self.courses.module_mut(&module_name) {
            module.content.set_link(kind, link);
        }
        self.ctx
            .notify(&format!("{} link updated successfully.", kind.label()));
        self.editor_mut(kind).reset();
        true
    }

    fn teacher_id(&self) -> Option<String> {
        let identity = self.ctx.session.identity(Role::Teacher);
        if identity.is_none() {
            self.ctx
                .notify(&ViewError::Unauthenticated { role: Role::Teacher }.to_string());
        }
        identity.map(|identity| identity.id)
    }

    /// Create a course owned by the logged-in teacher.
    pub async fn add_course(&mut self, course_id: &str, course_name: &str) -> bool {
        let (course_id, course_name) = (course_id.trim(), course_name.trim());
        if course_id.is_empty() || course_name.is_empty() {
            self.ctx.notify(MISSING_COURSE_FIELDS);
            return false;
        }
        let Some(teacher_id) = self.teacher_id() else {
            return false;
        };

        let result = self
            .ctx
            .client
            .add_course(course_id, course_name, &teacher_id, self.lifetime.options())
            .await;
        let Some(envelope) = self.ctx.settle(&self.lifetime, result, ADD_COURSE) else {
            return false;
        };

        let course = envelope
            .field::<Course>("course")
            .ok()
            .flatten()
            .unwrap_or_else(|| Course {
                course_id: course_id.to_string(),
                course_name: course_name.to_string(),
                teacher_id,
            });
        self.courses.add_course(course);
        self.ctx.notify(COURSE_ADDED);
        true
    }

    /// Create a module; it shows up at once if its course is expanded.
    pub async fn add_module(&mut self, module: &NewModule) -> bool {
        if module.course_id.trim().is_empty() || module.module_name.trim().is_empty() {
            self.ctx.notify(MISSING_MODULE_FIELDS);
            return false;
        }

        let result = self
            .ctx
            .client
            .add_module(module, self.lifetime.options())
            .await;
        let Some(envelope) = self.ctx.settle(&self.lifetime, result, ADD_MODULE) else {
            return false;
        };

        let created = envelope
            .field::<Module>("module")
            .ok()
            .flatten()
            .unwrap_or_else(|| Module {
                module_name: module.module_name.clone(),
                content: ModuleContent {
                    ppt_link: Some(module.ppt_link.clone()).filter(|l| !l.is_empty()),
                    audio_link: Some(module.audio_link.clone()).filter(|l| !l.is_empty()),
                    ..ModuleContent::default()
                },
            });
        self.courses.add_module(&module.course_id, created);
        self.ctx.notify(MODULE_ADDED);
        true
    }

    /// Fetch one course by id.
    pub async fn course_details(&mut self, course_id: &str) -> Option<Course> {
        let result = self
            .ctx
            .client
            .course_details(course_id, self.lifetime.options())
            .await;
        let envelope = self.ctx.settle(&self.lifetime, result, COURSE_DETAILS)?;

        match envelope.field::<Course>("course") {
            Ok(Some(course)) => Some(course),
            Ok(None) => {
                self.ctx.report_rejection(&envelope, COURSE_DETAILS);
                None
            }
            Err(error) => {
                self.ctx
                    .notify(&format!("{}: {error}", COURSE_DETAILS.failed));
                None
            }
        }
    }

    /// Extract the text of a presentation.
    pub async fn convert_ppt(&mut self, ppt_link: &str) -> Option<String> {
        let ppt_link = ppt_link.trim();
        if ppt_link.is_empty() {
            self.ctx.notify(&invalid_link_message(LinkKind::Ppt));
            return None;
        }

        let result = self
            .ctx
            .client
            .convert_ppt_to_text(ppt_link, self.lifetime.options())
            .await;
        let envelope = self.ctx.settle(&self.lifetime, result, CONVERT_PPT)?;
        Some(envelope.text("ppt_text").unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_link_messages_use_kind_labels() {
        assert_eq!(invalid_link_message(LinkKind::Ppt), "Please enter a valid PPT link.");
        assert_eq!(
            invalid_link_message(LinkKind::Audio),
            "Please enter a valid Audio link."
        );
        assert_eq!(invalid_link_message(LinkKind::Quiz), "Please enter a valid Quiz link.");
    }

    #[test]
    fn update_texts_follow_kind() {
        assert_eq!(link_update_texts(LinkKind::Audio).failed, "Failed to update Audio link");
        assert_eq!(link_update_texts(LinkKind::Ppt).error, "Error updating PPT link");
    }
}
