use crate::{Result as CoreErrorResult, validation};

use serde::Serialize;

/// Self-service sign-up payload for `POST /auth/register`
#[derive(Clone, Serialize)]
pub struct Registration {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

impl Registration {
    pub fn new(
        email: impl Into<String>,
        full_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            full_name: full_name.into(),
            password: password.into(),
        }
    }

    /// All three fields are required on the sign-up form.
    pub fn validate(&self) -> CoreErrorResult<()> {
        validation::require("full_name", &self.full_name)?;
        validation::require("email", &self.email)?;
        validation::password(&self.password)
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .finish_non_exhaustive()
    }
}
