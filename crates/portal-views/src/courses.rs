//! Course list with one expandable course, shared by all dashboards.

use portal_core::{Course, Module, Role};
use serde::Serialize;

use crate::context::{Lifetime, ViewContext};
use crate::error::ViewError;
use crate::state::ViewState;

pub const LOADING_COURSES: &str = "Loading courses...";
pub const NO_COURSES_ENROLLED: &str = "No courses enrolled.";
pub const NO_COURSES_FOUND: &str = "No courses found.";
pub const NO_MODULES: &str = "No modules available for this course.";

const COURSES_FALLBACK: &str = "Failed to fetch courses.";
const MODULES_FALLBACK: &str = "Failed to fetch modules.";

/// Render-ready copy of a dashboard's course area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Placeholder text to show instead of (part of) the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub courses: Vec<Course>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded_course_id: Option<String>,
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone)]
pub struct CourseBrowser {
    role: Role,
    state: ViewState,
    courses: Vec<Course>,
    expanded: Option<String>,
    modules: Vec<Module>,
}

impl CourseBrowser {
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            state: ViewState::Loading,
            courses: Vec::new(),
            expanded: None,
            modules: Vec::new(),
        }
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// Modules of the expanded course.
    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Fetch the course list for the session's identity.
    ///
    /// Without an identity the browser goes straight to
    /// `Error(Unauthenticated)` and nothing is sent.
    pub async fn load(&mut self, ctx: &ViewContext, lifetime: &Lifetime) {
        let Some(identity) = ctx.session.identity(self.role) else {
            tracing::debug!(role = %self.role, "no stored identity");
            self.state = ViewState::Error(ViewError::Unauthenticated { role: self.role });
            return;
        };

        self.state = ViewState::Loading;
        let result = ctx.client.courses(&identity, lifetime.options()).await;
        if lifetime.has_ended() {
            return;
        }

        self.state = match result {
            Err(error) if error.is_cancelled() => return,
            Err(error) => ViewState::Error(ViewError::FetchFailed(error.to_string())),
            Ok(envelope) if envelope.is_success() => match envelope.list::<Course>("courses") {
                Ok(courses) => {
                    self.courses = courses;
                    ViewState::Ready
                }
                Err(error) => ViewState::Error(ViewError::FetchFailed(error.to_string())),
            },
            Ok(envelope) => {
                ViewState::Error(ViewError::FetchFailed(envelope.message_or(COURSES_FALLBACK)))
            }
        };
    }

    /// Expand `course_id` and fetch its modules, or collapse it if it is
    /// already expanded.
    pub async fn toggle(&mut self, course_id: &str, ctx: &ViewContext, lifetime: &Lifetime) {
        if self.expanded.as_deref() == Some(course_id) {
            self.expanded = None;
            self.modules.clear();
            return;
        }

        self.expanded = Some(course_id.to_string());
        self.modules.clear();

        let result = ctx.client.modules(course_id, lifetime.options()).await;
        if lifetime.has_ended() {
            return;
        }

        match result {
            Err(error) if error.is_cancelled() => {}
            Err(error) => {
                self.state = ViewState::Error(ViewError::FetchFailed(error.to_string()));
            }
            Ok(envelope) if envelope.is_success() => match envelope.list::<Module>("modules") {
                Ok(modules) => self.modules = modules,
                Err(error) => {
                    self.state = ViewState::Error(ViewError::FetchFailed(error.to_string()));
                }
            },
            Ok(envelope) => {
                self.state =
                    ViewState::Error(ViewError::FetchFailed(envelope.message_or(MODULES_FALLBACK)));
            }
        }
    }

    pub(crate) fn module_mut(&mut self, module_name: &str) -> Option<&mut Module> {
        self.modules
            .iter_mut()
            .find(|module| module.module_name == module_name)
    }

    pub(crate) fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Show a new module if its course is the expanded one.
    pub(crate) fn add_module(&mut self, course_id: &str, module: Module) {
        if self.expanded.as_deref() == Some(course_id) {
            self.modules.push(module);
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        let notice = match &self.state {
            ViewState::Loading => Some(LOADING_COURSES),
            ViewState::Error(_) => None,
            ViewState::Ready if self.courses.is_empty() => Some(match self.role {
                Role::Student => NO_COURSES_ENROLLED,
                Role::Teacher => NO_COURSES_FOUND,
            }),
            ViewState::Ready if self.expanded.is_some() && self.modules.is_empty() => {
                Some(NO_MODULES)
            }
            ViewState::Ready => None,
        };

        DashboardSnapshot {
            state: self.state.label(),
            error: self.state.error().map(ToString::to_string),
            notice: notice.map(str::to_string),
            courses: self.courses.clone(),
            expanded_course_id: self.expanded.clone(),
            modules: self.modules.clone(),
        }
    }
}
