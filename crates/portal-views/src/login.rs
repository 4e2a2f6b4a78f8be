//! Student and teacher sign-in form.

use portal_core::{Identity, Role, Route};

use crate::context::{Lifetime, ViewContext};
use crate::registration::ALL_FIELDS_REQUIRED;
use crate::state::FormOutcome;

const LOGIN_FALLBACK: &str = "Login failed";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginView {
    ctx: ViewContext,
    lifetime: Lifetime,
    role: Role,
    pub form: LoginForm,
    error: Option<String>,
}

impl LoginView {
    #[must_use]
    pub fn new(ctx: ViewContext, role: Role) -> Self {
        let lifetime = ctx.lifetime();
        Self {
            ctx,
            lifetime,
            role,
            form: LoginForm::default(),
            error: None,
        }
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Session as updated by the last successful login.
    #[must_use]
    pub const fn context(&self) -> &ViewContext {
        &self.ctx
    }

    #[must_use]
    pub const fn lifetime(&self) -> &Lifetime {
        &self.lifetime
    }

    pub fn unmount(&self) {
        self.lifetime.end();
    }

    /// Authenticate and, on success, persist the returned id.
    ///
    /// A success reply without the id field counts as a failure.
    pub async fn submit(&mut self) -> FormOutcome {
        self.error = None;
        if self.form.email.is_empty() || self.form.password.is_empty() {
            self.error = Some(ALL_FIELDS_REQUIRED.to_string());
            return FormOutcome::Invalid;
        }

        let result = self
            .ctx
            .client
            .login(
                self.role,
                &self.form.email,
                &self.form.password,
                self.lifetime.options(),
            )
            .await;
        if self.lifetime.has_ended() {
            return FormOutcome::Cancelled;
        }

        let envelope = match result {
            Err(error) if error.is_cancelled() => return FormOutcome::Cancelled,
            Err(error) => {
                self.error = Some(error.to_string());
                return FormOutcome::Failed;
            }
            Ok(envelope) => envelope,
        };
        if !envelope.is_success() {
            self.error = Some(envelope.message_or(LOGIN_FALLBACK));
            return FormOutcome::Failed;
        }

        let Some(id) = envelope
            .text(self.role.id_field())
            .filter(|id| !id.trim().is_empty())
        else {
            tracing::warn!(role = %self.role, "login reply carried no id");
            self.error = Some(LOGIN_FALLBACK.to_string());
            return FormOutcome::Failed;
        };

        let identity = Identity::new(id, self.role);
        if let Err(error) = self.ctx.session.record_login(&identity) {
            self.error = Some(error.to_string());
            return FormOutcome::Failed;
        }

        tracing::info!(role = %self.role, "logged in");
        self.form = LoginForm::default();
        FormOutcome::LoggedIn {
            identity,
            navigate_to: Route::home_for(self.role),
        }
    }
}
