//! The uniform response shape every backend endpoint returns.
//!
//! ```json
//! { "status": "S", "message": "Login successful", "student_id": "S1" }
//! ```
//!
//! `status == "S"` is success; any other value (or a missing status) is a
//! failure, whatever the HTTP status was.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;

/// Status value the backend uses for success.
pub const SUCCESS_STATUS: &str = "S";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Envelope {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Call-specific fields (`courses`, `student_id`, `summary`, ...).
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Envelope {
    /// A success envelope with no payload.
    #[must_use]
    pub fn success() -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            ..Self::default()
        }
    }

    /// A failure envelope carrying `message`.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: "E".to_string(),
            message: Some(message.into()),
            payload: Map::new(),
        }
    }

    /// Builder-style payload insertion, used mostly by tests and the fake backend.
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.payload.insert(field.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// The server message, if present and non-empty.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// The server message, or `fallback` when the server sent none.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.message().unwrap_or(fallback).to_string()
    }

    /// Decode a payload field. Absent and `null` fields are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Decode` if the field is present but has the wrong shape.
    pub fn field<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, CoreError> {
        match self.payload.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| CoreError::Decode {
                    field: name.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    /// Decode an array field. Absent and `null` fields are an empty list.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Decode` if the field is present but is not an
    /// array of `T`.
    pub fn list<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, CoreError> {
        Ok(self.field::<Vec<T>>(name)?.unwrap_or_default())
    }

    /// A payload field rendered as text.
    ///
    /// Strings are returned as-is; other non-null values are rendered as JSON.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<String> {
        match self.payload.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Turn a failure envelope into `CoreError::Rejected`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Rejected` with the server message, or `fallback`
    /// when the server sent none, if the status is not `"S"`.
    pub fn into_success(self, fallback: &str) -> Result<Self, CoreError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(CoreError::Rejected {
                message: self.message_or(fallback),
            })
        }
    }
}
