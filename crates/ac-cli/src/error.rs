use ac_config::ConfigError;
use ac_core::CoreError;
use ac_session::{ClientError, SessionError, View};

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("{message}")]
    Session {
        message: String,
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },

    #[error("{message}")]
    Client {
        message: String,
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Invalid input: {source}")]
    Input {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("{view} is not available, redirected to {target}{hint}")]
    Redirected {
        view: View,
        target: View,
        hint: &'static str,
        location: ErrorLocation,
    },

    #[error("{message}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Output error: {source}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Guard refused `view` and sent the user to `target`
    #[track_caller]
    pub fn redirected(view: View, target: View) -> Self {
        let hint = match target {
            View::Login => " (run `ac login` first)",
            View::Unauthorized => " (an administrator account is required)",
            _ => "",
        };

        CliError::Redirected {
            view,
            target,
            hint,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn usage<S: Into<String>>(message: S) -> Self {
        CliError::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        CliError::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SessionError> for CliError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        CliError::Session {
            message: source.user_message(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for CliError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        CliError::Client {
            message: source.user_message(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for CliError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        CliError::Input {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CliError::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CliError>;
