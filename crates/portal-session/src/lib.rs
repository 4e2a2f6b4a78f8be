//! # portal-session
//!
//! Session persistence for the portal client.
//!
//! Two layers:
//! - [`SessionStore`]: flat string key/value persistence that survives
//!   process restarts ([`FileSessionStore`]) or lives in memory
//!   ([`MemorySessionStore`]).
//! - [`Session`]: a snapshot of the store taken when a view context is built,
//!   passed explicitly to the views instead of being read ad hoc.

pub mod context;
pub mod error;
pub mod store;

pub use context::Session;
pub use error::SessionError;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

/// Key holding the student id written by the student login.
pub const STUDENT_ID_KEY: &str = "studentId";
/// Key holding the teacher id written by the teacher login.
pub const TEACHER_ID_KEY: &str = "teacherId";
/// Key holding the module last picked for summarization.
pub const SELECTED_MODULE_KEY: &str = "selectedModuleName";
