//! Student landing page: courses, quick summaries and the doubt solver.

use portal_client::endpoints::SummaryKind;
use portal_core::Role;

use crate::context::{ActionTexts, Lifetime, ViewContext};
use crate::courses::{CourseBrowser, DashboardSnapshot};
use crate::state::ViewState;

pub const NO_FILE_LINKS: &str = "Please enter at least one file link.";
pub const EMPTY_PROMPT: &str = "Please enter a query prompt.";
pub const FILES_UPLOADED: &str = "Files uploaded successfully.";

const TEXT_SUMMARY: ActionTexts = ActionTexts {
    failed: "Text summarization failed",
    error: "Error summarizing text",
};
const AUDIO_SUMMARY: ActionTexts = ActionTexts {
    failed: "Audio summarization failed",
    error: "Error summarizing audio",
};
const UPLOAD: ActionTexts = ActionTexts {
    failed: "File upload failed",
    error: "Error uploading files",
};
const CHATBOT: ActionTexts = ActionTexts {
    failed: "Chatbot query failed",
    error: "Error querying chatbot",
};

/// Split a multi-line input into trimmed, non-blank links.
#[must_use]
pub fn parse_file_links(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug)]
pub struct OuterDashboard {
    ctx: ViewContext,
    lifetime: Lifetime,
    courses: CourseBrowser,
    doubt_solver_open: bool,
}

impl OuterDashboard {
    #[must_use]
    pub fn new(ctx: ViewContext) -> Self {
        let lifetime = ctx.lifetime();
        Self {
            ctx,
            lifetime,
            courses: CourseBrowser::new(Role::Student),
            doubt_solver_open: false,
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
    pub const fn context(&self) -> &ViewContext {
        &self.ctx
    }

    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.courses.snapshot()
    }

    pub async fn toggle(&mut self, course_id: &str) {
        self.courses.toggle(course_id, &self.ctx, &self.lifetime).await;
    }

    /// Summarize a module and show the result as a notification.
    ///
    /// The module is remembered in the session before the request goes out.
    pub async fn summarize(&mut self, kind: SummaryKind, module_name: &str) -> Option<String> {
        if let Err(error) = self.ctx.session.select_module(module_name) {
            tracing::warn!(%error, "could not remember selected module");
        }

        let texts = match kind {
            SummaryKind::Text => TEXT_SUMMARY,
            SummaryKind::Audio => AUDIO_SUMMARY,
        };
        let result = self
            .ctx
            .client
            .summarize(kind, module_name, self.lifetime.options())
            .await;
        let envelope = self.ctx.settle(&self.lifetime, result, texts)?;

        let summary = envelope.text(kind.field()).unwrap_or_default();
        let label = match kind {
            SummaryKind::Text => "Text summary",
            SummaryKind::Audio => "Audio summary",
        };
        self.ctx.notify(&format!("{label}: {summary}"));
        Some(summary)
    }

    #[must_use]
    pub const fn doubt_solver_open(&self) -> bool {
        self.doubt_solver_open
    }

    pub const fn open_doubt_solver(&mut self) {
        self.doubt_solver_open = true;
    }

    pub const fn close_doubt_solver(&mut self) {
        self.doubt_solver_open = false;
    }

    /// Hand a newline-separated list of file links to the backend.
    pub async fn upload_files(&mut self, input: &str) -> bool {
        let links = parse_file_links(input);
        if links.is_empty() {
            self.ctx.notify(NO_FILE_LINKS);
            return false;
        }

        let result = self
            .ctx
            .client
            .upload_files_by_link(&links, self.lifetime.options())
            .await;
        if self.ctx.settle(&self.lifetime, result, UPLOAD).is_none() {
            return false;
        }
        self.ctx.notify(FILES_UPLOADED);
        true
    }

    /// Ask the chatbot about the uploaded material.
    pub async fn ask(&mut self, prompt: &str) -> Option<String> {
        if prompt.trim().is_empty() {
            self.ctx.notify(EMPTY_PROMPT);
            return None;
        }

        let result = self
            .ctx
            .client
            .chatbot_query(prompt, self.lifetime.options())
            .await;
        let envelope = self.ctx.settle(&self.lifetime, result, CHATBOT)?;
        let response = envelope.text("response").unwrap_or_default();
        self.ctx.notify(&format!("Chatbot response: {response}"));
        Some(response)
    }
}
