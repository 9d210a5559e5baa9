use crate::{Result as CoreErrorResult, Role, validation};

use serde::Serialize;

/// Partial account update for `PUT /users/{id}`.
///
/// Only fields that are set are sent; an empty password means "leave unchanged".
#[derive(Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserUpdate {
    /// Drop a blank password and check whatever remains.
    pub fn normalized(mut self) -> CoreErrorResult<Self> {
        if self.password.as_deref().is_some_and(|p| p.is_empty()) {
            self.password = None;
        }

        if let Some(email) = self.email.as_deref() {
            validation::require("email", email)?;
        }
        if let Some(password) = self.password.as_deref() {
            validation::password(password)?;
        }

        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.full_name.is_none()
            && self.password.is_none()
            && self.is_active.is_none()
            && self.role.is_none()
    }
}

impl std::fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserUpdate")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("is_active", &self.is_active)
            .field("role", &self.role)
            .finish()
    }
}
