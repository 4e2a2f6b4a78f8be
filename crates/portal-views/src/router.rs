//! Path → mounted view.

use portal_core::{CoreError, Role, Route};

use crate::context::{Lifetime, ViewContext};
use crate::login::LoginView;
use crate::outer::OuterDashboard;
use crate::registration::RegistrationView;
use crate::state::ViewState;
use crate::student::StudentDashboard;
use crate::teacher::TeacherDashboard;

/// A mounted view.
#[derive(Debug)]
pub enum Page {
    Registration(RegistrationView),
    Login(LoginView),
    Outer(OuterDashboard),
    Student(StudentDashboard),
    Teacher(TeacherDashboard),
}

impl Page {
    #[must_use]
    pub const fn route(&self) -> Route {
        match self {
            Self::Registration(view) => match view.role() {
                Role::Student => Route::StudentRegistration,
                Role::Teacher => Route::TeacherRegistration,
            },
            Self::Login(view) => Route::login_for(view.role()),
            Self::Outer(_) => Route::OuterDashboard,
            Self::Student(_) => Route::StudentDashboard,
            Self::Teacher(_) => Route::TeacherDashboard,
        }
    }

    /// Page state, for pages that load data on mount.
    #[must_use]
    pub const fn state(&self) -> Option<&ViewState> {
        match self {
            Self::Registration(_) | Self::Login(_) => None,
            Self::Outer(view) => Some(view.state()),
            Self::Student(view) => Some(view.state()),
            Self::Teacher(view) => Some(view.state()),
        }
    }

    #[must_use]
    pub const fn lifetime(&self) -> &Lifetime {
        match self {
            Self::Registration(view) => view.lifetime(),
            Self::Login(view) => view.lifetime(),
            Self::Outer(view) => view.lifetime(),
            Self::Student(view) => view.lifetime(),
            Self::Teacher(view) => view.lifetime(),
        }
    }

    pub fn unmount(&self) {
        self.lifetime().end();
    }
}

/// Static router: no parameters, no guards.
#[derive(Debug, Clone, Copy, Default)]
pub struct Router;

impl Router {
    /// Resolve `path` and mount its view.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownRoute` if no route has exactly this path.
    pub async fn open(path: &str, ctx: ViewContext) -> Result<Page, CoreError> {
        let route: Route = path.parse()?;
        Ok(Self::mount(route, ctx).await)
    }

    /// Build the view for `route` and run its initial load.
    pub async fn mount(route: Route, ctx: ViewContext) -> Page {
        tracing::debug!(%route, "mounting view");
        match route {
            Route::StudentRegistration => {
                Page::Registration(RegistrationView::new(ctx, Role::Student))
            }
            Route::TeacherRegistration => {
                Page::Registration(RegistrationView::new(ctx, Role::Teacher))
            }
            Route::StudentLogin => Page::Login(LoginView::new(ctx, Role::Student)),
            Route::TeacherLogin => Page::Login(LoginView::new(ctx, Role::Teacher)),
            Route::OuterDashboard => {
                let mut view = OuterDashboard::new(ctx);
                view.mount().await;
                Page::Outer(view)
            }
            Route::StudentDashboard => {
                let mut view = StudentDashboard::new(ctx);
                view.mount().await;
                Page::Student(view)
            }
            Route::TeacherDashboard => {
                let mut view = TeacherDashboard::new(ctx);
                view.mount().await;
                Page::Teacher(view)
            }
        }
    }
}
