//! Input checks enforced before any request leaves the client.
//!
//! Only required fields and the minimum password length are checked here;
//! everything else is the remote API's business.

use crate::{CoreError, Result as CoreErrorResult};

/// Minimum accepted password length, matching the registration form
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Reject blank values for a required field.
#[track_caller]
pub fn require(field: &'static str, value: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "is required"));
    }
    Ok(())
}

/// Reject passwords shorter than [`MIN_PASSWORD_LENGTH`] characters.
#[track_caller]
pub fn password(value: &str) -> CoreErrorResult<()> {
    require("password", value)?;

    let length = value.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(
            "password",
            format!("must be at least {MIN_PASSWORD_LENGTH} characters, got {length}"),
        ));
    }
    Ok(())
}
