//! Entities returned by the portal backend.
//!
//! Every field the backend may omit is optional; unknown fields are ignored
//! so newer backends do not break older clients.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// A course an identity is enrolled in (student) or teaches (teacher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Course {
    pub course_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub course_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub teacher_id: String,
}

/// A unit of course content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Module {
    pub module_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "ModuleContent")]
    pub content: ModuleContent,
}

/// The backend writes `null` for fields its documents lack; read those as
/// the field's default, the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Links and generated text attached to a module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ModuleContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_drive_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ppt_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ppt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ppt_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_summary: Option<String>,
}

/// The module links a teacher can replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Ppt,
    Audio,
    Quiz,
}

impl LinkKind {
    /// Wire name of the request field carrying the link.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Ppt => "ppt_link",
            Self::Audio => "audio_link",
            Self::Quiz => "quiz_link",
        }
    }

    /// Label used in notifications ("PPT link updated successfully.").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ppt => "PPT",
            Self::Audio => "Audio",
            Self::Quiz => "Quiz",
        }
    }
}

impl ModuleContent {
    /// Current value of the given link, if set and non-empty.
    #[must_use]
    pub fn link(&self, kind: LinkKind) -> Option<&str> {
        let value = match kind {
            LinkKind::Ppt => self.ppt_link.as_deref(),
            LinkKind::Audio => self.audio_link.as_deref(),
            LinkKind::Quiz => self.quiz_link.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    pub fn set_link(&mut self, kind: LinkKind, link: impl Into<String>) {
        let slot = match kind {
            LinkKind::Ppt => &mut self.ppt_link,
            LinkKind::Audio => &mut self.audio_link,
            LinkKind::Quiz => &mut self.quiz_link,
        };
        *slot = Some(link.into());
    }
}
