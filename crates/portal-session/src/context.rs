//! Explicit session context threaded through view construction.

use std::fmt;
use std::sync::Arc;

use portal_core::{Identity, Role};

use crate::error::SessionError;
use crate::store::SessionStore;
use crate::SELECTED_MODULE_KEY;

/// Snapshot of the session store plus a handle for write-through updates.
///
/// Reads come from the snapshot taken in [`Session::load`]; writes go to the
/// store first and update the snapshot only once persisted.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
    student_id: Option<String>,
    teacher_id: Option<String>,
    selected_module: Option<String>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("student_id", &self.student_id)
            .field("teacher_id", &self.teacher_id)
            .field("selected_module", &self.selected_module)
            .finish_non_exhaustive()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Session {
    /// Take a snapshot of `store`.
    #[must_use]
    pub fn load(store: Arc<dyn SessionStore>) -> Self {
        let student_id = non_empty(store.get(Role::Student.session_key()));
        let teacher_id = non_empty(store.get(Role::Teacher.session_key()));
        let selected_module = non_empty(store.get(SELECTED_MODULE_KEY));
        Self {
            store,
            student_id,
            teacher_id,
            selected_module,
        }
    }

    /// The stored identity for `role`, if a login of that role has happened.
    #[must_use]
    pub fn identity(&self, role: Role) -> Option<Identity> {
        let id = match role {
            Role::Student => self.student_id.as_ref(),
            Role::Teacher => self.teacher_id.as_ref(),
        };
        id.map(|id| Identity::new(id.clone(), role))
    }

    #[must_use]
    pub fn selected_module(&self) -> Option<&str> {
        self.selected_module.as_deref()
    }

    /// Persist a fresh login, overwriting any earlier identity of the same role.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the store cannot persist the id.
    pub fn record_login(&mut self, identity: &Identity) -> Result<(), SessionError> {
        self.store.set(identity.role.session_key(), &identity.id)?;
        tracing::debug!(role = %identity.role, "stored identity");
        match identity.role {
            Role::Student => self.student_id = Some(identity.id.clone()),
            Role::Teacher => self.teacher_id = Some(identity.id.clone()),
        }
        Ok(())
    }

    /// Remember which module the user last acted on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the store cannot persist the name.
    pub fn select_module(&mut self, module_name: &str) -> Result<(), SessionError> {
        self.store.set(SELECTED_MODULE_KEY, module_name)?;
        self.selected_module = Some(module_name.to_string());
        Ok(())
    }
}
