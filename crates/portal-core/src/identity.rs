use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Who an identity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    /// Session store key holding this role's id.
    #[must_use]
    pub const fn session_key(self) -> &'static str {
        match self {
            Self::Student => "studentId",
            Self::Teacher => "teacherId",
        }
    }

    /// Envelope field carrying the id after a successful login.
    #[must_use]
    pub const fn id_field(self) -> &'static str {
        match self {
            Self::Student => "student_id",
            Self::Teacher => "teacher_id",
        }
    }

    /// Capitalized label used in user-facing text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => f.write_str("student"),
            Self::Teacher => f.write_str("teacher"),
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            other => Err(CoreError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

/// Locally persisted student or teacher id established at login.
///
/// No expiry and no refresh: an identity lives until a later login of the
/// same role overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Identity {
    pub id: String,
    pub role: Role,
}

impl Identity {
    #[must_use]
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    #[must_use]
    pub fn student(id: impl Into<String>) -> Self {
        Self::new(id, Role::Student)
    }

    #[must_use]
    pub fn teacher(id: impl Into<String>) -> Self {
        Self::new(id, Role::Teacher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_keys_match_stored_names() {
        assert_eq!(Role::Student.session_key(), "studentId");
        assert_eq!(Role::Teacher.session_key(), "teacherId");
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Teacher".parse::<Role>(), Ok(Role::Teacher));
        assert_eq!(" student ".parse::<Role>(), Ok(Role::Student));
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn role_display_roundtrips_through_from_str() {
        for role in [Role::Student, Role::Teacher] {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }
}
