//! # portal-views
//!
//! Page views for the portal client, one per route, each a small state
//! machine over a [`ViewContext`].
//!
//! Dashboards follow `Loading → Ready | Error`. The primary course fetch
//! decides the state; secondary actions (summaries, quizzes, link uploads)
//! never change it and report through the context's [`Notifier`] instead.
//! Every request a view makes is tied to the view's [`Lifetime`]; results
//! that arrive after [`Lifetime::end`] are dropped.

pub mod context;
pub mod courses;
pub mod error;
pub mod login;
pub mod outer;
pub mod registration;
pub mod router;
pub mod state;
pub mod student;
pub mod teacher;

pub use context::{Lifetime, Notifier, RecordingNotifier, ViewContext};
pub use courses::{CourseBrowser, DashboardSnapshot};
pub use error::ViewError;
pub use login::LoginView;
pub use outer::OuterDashboard;
pub use registration::RegistrationView;
pub use router::{Page, Router};
pub use state::{FormOutcome, Modal, ViewState};
pub use student::StudentDashboard;
pub use teacher::TeacherDashboard;
