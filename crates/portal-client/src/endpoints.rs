//! One typed wrapper per backend endpoint.
//!
//! Each wrapper builds the request payload the backend expects and returns
//! the raw [`Envelope`]; interpreting success or failure is left to callers.

use portal_core::entities::LinkKind;
use portal_core::{Envelope, Identity, Role};
use serde_json::json;

use crate::client::{ApiClient, CallOptions};
use crate::error::ClientError;
use crate::Method;

/// Endpoint paths, relative to the configured base URL.
pub mod paths {
    pub const REGISTER_STUDENT: &str = "/api/RegisterStudent";
    pub const REGISTER_TEACHER: &str = "/api/RegisterTeacher";
    pub const LOGIN_STUDENT: &str = "/api/setCredentialsStudent";
    pub const LOGIN_TEACHER: &str = "/api/setCredentialsTeacher";
    pub const STUDENT_DETAILS: &str = "/api/getStudentDetails";
    pub const TEACHER_DETAILS: &str = "/api/getTeacherDetails";
    pub const ALL_MODULES: &str = "/api/getAllModules";
    pub const QUIZ_LINK: &str = "/api/getQuizLink";
    pub const SUMMARY_TEXT: &str = "/api/setSummaryText";
    pub const SUMMARY_AUDIO: &str = "/api/setSummaryAudio";
    pub const GENERATE_QUIZ: &str = "/api/generateQuizFromModule";
    pub const ADD_PPT: &str = "/api/addppt";
    pub const ADD_AUDIO: &str = "/api/addaudio";
    pub const UPLOAD_QUIZ_LINK: &str = "/api/uploadquizlink";
    pub const UPLOAD_FILES_BY_LINK: &str = "/api/uploadFilesByLink";
    pub const CHATBOT_QUERY: &str = "/api/chatbotquery";
    pub const COURSE_DETAILS: &str = "/api/getCourseDetails";
    pub const ADD_COURSE: &str = "/api/addcourse";
    pub const ADD_MODULE: &str = "/api/addmodule";
    pub const CONVERT_PPT_TO_TEXT: &str = "/api/convertppttotext";
}

/// Which summary the backend should produce for a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    Text,
    Audio,
}

impl SummaryKind {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Text => paths::SUMMARY_TEXT,
            Self::Audio => paths::SUMMARY_AUDIO,
        }
    }

    /// Envelope field carrying the summary.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Text => "summary",
            Self::Audio => "audio_summary",
        }
    }
}

/// Path of the endpoint that replaces a module link.
#[must_use]
pub const fn link_update_path(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Ppt => paths::ADD_PPT,
        LinkKind::Audio => paths::ADD_AUDIO,
        LinkKind::Quiz => paths::UPLOAD_QUIZ_LINK,
    }
}

/// Fields of a new module (`/api/addmodule`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewModule {
    pub course_id: String,
    pub module_name: String,
    pub ppt_link: String,
    pub audio_link: String,
}

impl ApiClient {
    /// `/api/RegisterStudent` or `/api/RegisterTeacher`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn register(
        &self,
        role: Role,
        id: &str,
        email: &str,
        password: &str,
        options: CallOptions,
    ) -> Result<Envelope, ClientError> {
        let (path, body) = match role {
            Role::Student => (
                paths::REGISTER_STUDENT,
                json!({ "student_id": id, "email": email, "password": password }),
            ),
            Role::Teacher => (
                paths::REGISTER_TEACHER,
                json!({ "teacher_id": id, "email": email, "password": password }),
            ),
        };
        self.post(path, &body, options).await
    }

    /// `/api/setCredentialsStudent` or `/api/setCredentialsTeacher`.
    ///
    /// On success the envelope carries `student_id` / `teacher_id`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn login(
        &self,
        role: Role,
        email: &str,
        password: &str,
        options: CallOptions,
    ) -> Result<Envelope, ClientError> {
        let path = match role {
            Role::Student => paths::LOGIN_STUDENT,
            Role::Teacher => paths::LOGIN_TEACHER,
        };
        let body = json!({ "email": email, "password": password });
        self.post(path, &body, options).await
    }

    /// Courses for a student (`/api/getStudentDetails`) or teacher
    /// (`/api/getTeacherDetails`); payload field `courses`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn courses(
        &self,
        identity: &Identity,
        options: CallOptions,
    ) -> Result<Envelope, ClientError> {
        let (path, body) = match identity.role {
            Role::Student => (
                paths::STUDENT_DETAILS,
                json!({ "student_id": identity.id }),
            ),
            Role::Teacher => (
                paths::TEACHER_DETAILS,
                json!({ "teacher_id": identity.id }),
            ),
        };
        self.post(path, &body, options).await
    }

    /// `/api/getAllModules`; payload field `modules`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn modules(
        &self,
        course_id: &str,
        options: CallOptions,
    ) -> Result<Envelope, ClientError> {
        self.post(paths::ALL_MODULES, &json!({ "course_id": course_id }), options)
            .await
    }

    /// `/api/getQuizLink`; payload field `quiz_link`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn quiz_link(
        &self,
        module_name: &str,
        options: CallOptions,
    ) -> Result<Envelope, ClientError> {
        self.post(paths::QUIZ_LINK, &module_body(module_name), options)
            .await
    }

    /// `/api/setSummaryText` or `/api/setSummaryAudio`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn summarize(
        &self,
        kind: SummaryKind,
        module_name: &str,
        options: CallOptions,
    ) -> Result<Envelope, ClientError> {
        self.post(kind.path(), &module_body(module_name), options)
            .await
    }

    /// `/api/generateQuizFromModule`; payload field `quiz`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn generate_quiz(
        &self,
        module_name: &str,
        options: CallOptions,
    ) -> Result<Envelope, ClientError> {
        self.post(paths::GENERATE_QUIZ, &module_body(module_name), options)
            .await
    }

    /// `/api/addppt`, `/api/addaudio` or `/api/uploadquizlink`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn update_link(
        &self,
        kind: LinkKind,
        module_name: &str,
        link: &str,
        options: CallOptions,
    ) -> Result<Envelope, ClientError> {
        let mut body = module_body(module_name);
        body[kind.field_name()] = json!(link);
        self.post(link_update_path(kind), &body, options).await
    }

    /// `/api/uploadFilesByLink`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn upload_files_by_link(
        &self,
        file_links: &[String],
        options: CallOptions,
    ) -> Result<Envelope, ClientError> {
        self.post(
            paths::UPLOAD_FILES_BY_LINK,
            &json!({ "file_links": file_links }),
            options,
        )
        .await
    }

    /// `/api/chatbotquery`; payload field `response`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn chatbot_query(
        &self,
        prompt: &str,
        options: CallOptions,
    ) -> Result<Envelope, ClientError> {
        self.post(paths::CHATBOT_QUERY, &json!({ "prompt": prompt }), options)
            .await
    }

    /// `GET /api/getCourseDetails?course_id=...`; payload field `course`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn course_details(
        &self,
        course_id: &str,
        options: CallOptions,
    ) -> Result<Envelope, ClientError> {
        let options = options.query("course_id", course_id);
        self.call::<()>(Method::GET, paths::COURSE_DETAILS, None, options)
            .await
    }

    /// `/api/addcourse`. The backend reads its fields from the query string.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn add_course(
        &self,
        course_id: &str,
        course_name: &str,
        teacher_id: &str,
        options: CallOptions,
    ) -> Result<Envelope, ClientError> {
        let options = options
            .query("course_id", course_id)
            .query("course_name", course_name)
            .query("teacher_id", teacher_id);
        self.call::<()>(Method::POST, paths::ADD_COURSE, None, options)
            .await
    }

    /// `/api/addmodule`. The backend reads its fields from the query string.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn add_module(
        &self,
        module: &NewModule,
        options: CallOptions,
    ) -> Result<Envelope, ClientError> {
        let options = options
            .query("course_id", module.course_id.as_str())
            .query("module_name", module.module_name.as_str())
            .query("ppt_link", module.ppt_link.as_str())
            .query("audio_link", module.audio_link.as_str());
        self.call::<()>(Method::POST, paths::ADD_MODULE, None, options)
            .await
    }

    /// `/api/convertppttotext`; payload field `ppt_text`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn convert_ppt_to_text(
        &self,
        ppt_link: &str,
        options: CallOptions,
    ) -> Result<Envelope, ClientError> {
        self.post(
            paths::CONVERT_PPT_TO_TEXT,
            &json!({ "ppt_link": ppt_link }),
            options,
        )
        .await
    }
}

fn module_body(module_name: &str) -> serde_json::Value {
    json!({ "module_name": module_name })
}
