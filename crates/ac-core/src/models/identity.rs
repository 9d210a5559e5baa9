use crate::Role;

use serde::{Deserialize, Serialize};

/// Snapshot of an account as returned by the remote API.
///
/// Identities are replaced wholesale on every fetch and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Role,
    pub is_active: bool,
}

impl Identity {
    /// Name to greet the user with.
    ///
    /// Falls back to the local part of the email when no full name is set.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
