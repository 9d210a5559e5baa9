use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_KEEP_TOKEN_ON_TRANSIENT_FAILURE, DEFAULT_TOKEN_FILE,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Credential token file, relative to the config directory
    pub token_file: String,
    /// Keep the persisted token when `/auth/me` fails for a transient reason
    /// (network error, timeout, 5xx) so the next start can retry it.
    pub keep_token_on_transient_failure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_file: String::from(DEFAULT_TOKEN_FILE),
            keep_token_on_transient_failure: DEFAULT_KEEP_TOKEN_ON_TRANSIENT_FAILURE,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token_file.trim().is_empty() {
            return Err(ConfigError::session("session.token_file cannot be empty"));
        }

        let path = Path::new(&self.token_file);
        if path.is_absolute() || self.token_file.contains("..") {
            return Err(ConfigError::session(
                "session.token_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
