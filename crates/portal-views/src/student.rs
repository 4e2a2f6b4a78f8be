//! Student course page: quizzes and summaries in modals.

use portal_client::endpoints::SummaryKind;
use portal_core::Role;
use serde::Serialize;

use crate::context::{ActionTexts, Lifetime, ViewContext};
use crate::courses::{CourseBrowser, DashboardSnapshot};
use crate::state::{Modal, ViewState};

const QUIZ_LINK: ActionTexts = ActionTexts {
    failed: "Failed to retrieve quiz link",
    error: "Error retrieving quiz link",
};
const TEXT_SUMMARY: ActionTexts = ActionTexts {
    failed: "Failed to summarize text",
    error: "Error summarizing text",
};
const AUDIO_SUMMARY: ActionTexts = ActionTexts {
    failed: "Failed to summarize audio",
    error: "Error summarizing audio",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentSnapshot {
    #[serde(flatten)]
    pub dashboard: DashboardSnapshot,
    pub text_summary: Modal,
    pub audio_summary: Modal,
}

#[derive(Debug)]
pub struct StudentDashboard {
    ctx: ViewContext,
    lifetime: Lifetime,
    courses: CourseBrowser,
    pub text_summary: Modal,
    pub audio_summary: Modal,
}

impl StudentDashboard {
    #[must_use]
    pub fn new(ctx: ViewContext) -> Self {
        let lifetime = ctx.lifetime();
        Self {
            ctx,
            lifetime,
            courses: CourseBrowser::new(Role::Student),
            text_summary: Modal::default(),
            audio_summary: Modal::default(),
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
    pub fn snapshot(&self) -> StudentSnapshot {
        StudentSnapshot {
            dashboard: self.courses.snapshot(),
            text_summary: self.text_summary.clone(),
            audio_summary: self.audio_summary.clone(),
        }
    }

    pub async fn toggle(&mut self, course_id: &str) {
        self.courses.toggle(course_id, &self.ctx, &self.lifetime).await;
    }

    /// Look up the quiz link of a module. A success reply without a link is
    /// reported as a failure.
    pub async fn attend_quiz(&mut self, module_name: &str) -> Option<String> {
        let result = self
            .ctx
            .client
            .quiz_link(module_name, self.lifetime.options())
            .await;
        let envelope = self.ctx.settle(&self.lifetime, result, QUIZ_LINK)?;

        let link = envelope.text("quiz_link").filter(|link| !link.is_empty());
        if link.is_none() {
            self.ctx.report_rejection(&envelope, QUIZ_LINK);
        }
        link
    }

    /// Summarize a module into the matching modal.
    pub async fn summarize(&mut self, kind: SummaryKind, module_name: &str) -> bool {
        let texts = match kind {
            SummaryKind::Text => TEXT_SUMMARY,
            SummaryKind::Audio => AUDIO_SUMMARY,
        };
        let result = self
            .ctx
            .client
            .summarize(kind, module_name, self.lifetime.options())
            .await;
        let Some(envelope) = self.ctx.settle(&self.lifetime, result, texts) else {
            return false;
        };

        let summary = envelope.text(kind.field()).unwrap_or_default();
        match kind {
            SummaryKind::Text => self.text_summary.show(summary),
            SummaryKind::Audio => self.audio_summary.show(summary),
        }
        true
    }

    pub const fn close_text_summary(&mut self) {
        self.text_summary.close();
    }

    pub const fn close_audio_summary(&mut self) {
        self.audio_summary.close();
    }
}
