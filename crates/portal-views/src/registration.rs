//! Student and teacher sign-up form.

use portal_core::Role;

use crate::context::{Lifetime, ViewContext};
use crate::state::FormOutcome;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const REGISTRATION_SUCCESSFUL: &str = "Registration successful!";
const REGISTRATION_FALLBACK: &str = "Registration failed";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub id: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    fn validate(&self) -> Result<(), &'static str> {
        let fields = [&self.id, &self.email, &self.password, &self.confirm_password];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(ALL_FIELDS_REQUIRED);
        }
        if self.password != self.confirm_password {
            return Err(PASSWORDS_DO_NOT_MATCH);
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct RegistrationView {
    ctx: ViewContext,
    lifetime: Lifetime,
    role: Role,
    pub form: RegistrationForm,
    error: Option<String>,
}

impl RegistrationView {
    #[must_use]
    pub fn new(ctx: ViewContext, role: Role) -> Self {
        let lifetime = ctx.lifetime();
        Self {
            ctx,
            lifetime,
            role,
            form: RegistrationForm::default(),
            error: None,
        }
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Inline error under the form, if the last submit failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn lifetime(&self) -> &Lifetime {
        &self.lifetime
    }

    pub fn unmount(&self) {
        self.lifetime.end();
    }

    /// Validate locally, then register with the backend.
    ///
    /// On success the form is reset and the user is notified; the view does
    /// not navigate.
    pub async fn submit(&mut self) -> FormOutcome {
        self.error = None;
        if let Err(message) = self.form.validate() {
            self.error = Some(message.to_string());
            return FormOutcome::Invalid;
        }

        let result = self
            .ctx
            .client
            .register(
                self.role,
                &self.form.id,
                &self.form.email,
                &self.form.password,
                self.lifetime.options(),
            )
            .await;
        if self.lifetime.has_ended() {
            return FormOutcome::Cancelled;
        }

        match result {
            Err(error) if error.is_cancelled() => FormOutcome::Cancelled,
            Err(error) => {
                self.error = Some(error.to_string());
                FormOutcome::Failed
            }
            Ok(envelope) if envelope.is_success() => {
                tracing::info!(role = %self.role, "registered");
                self.ctx.notify(REGISTRATION_SUCCESSFUL);
                self.form = RegistrationForm::default();
                FormOutcome::Registered
            }
            Ok(envelope) => {
                self.error = Some(envelope.message_or(REGISTRATION_FALLBACK));
                FormOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str, email: &str, password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            id: id.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn any_empty_field_is_rejected_first() {
        assert_eq!(form("", "a@b", "x", "y").validate(), Err(ALL_FIELDS_REQUIRED));
        assert_eq!(form("S1", "a@b", "x", "").validate(), Err(ALL_FIELDS_REQUIRED));
    }

    #[test]
    fn mismatch_is_rejected() {
        assert_eq!(
            form("S1", "a@b", "x", "y").validate(),
            Err(PASSWORDS_DO_NOT_MATCH)
        );
        assert_eq!(form("S1", "a@b", "x", "x").validate(), Ok(()));
    }
}
