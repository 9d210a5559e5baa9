use crate::{ClientError, TokenStoreError};

use ac_core::CoreError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures surfaced to callers of the session store.
///
/// A stale token found at startup is never reported here: it downgrades the
/// session to anonymous and is only logged.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Authentication failed: {message} {location}")]
    Authentication {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server unreachable: {source} {location}")]
    Network {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Request rejected: {source} {location}")]
    Api {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Token storage failed: {source} {location}")]
    Storage {
        #[source]
        source: TokenStoreError,
        location: ErrorLocation,
    },

    #[error("Invalid input: {source} {location}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Session is still initializing {location}")]
    NotReady { location: ErrorLocation },
}

impl SessionError {
    /// Map a failed `POST /auth/login`: any client-side (4xx) refusal means bad credentials.
    #[track_caller]
    pub fn from_login(source: ClientError) -> Self {
        match source.status() {
            Some(status) if (400..500).contains(&status) => SessionError::Authentication {
                message: source.user_message(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => Self::from_client(source),
        }
    }

    #[track_caller]
    pub fn from_client(source: ClientError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if source.is_transient() {
            SessionError::Network { source, location }
        } else {
            SessionError::Api { source, location }
        }
    }

    #[track_caller]
    pub fn not_ready() -> Self {
        SessionError::NotReady {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Authentication { message, .. } => message.clone(),
            SessionError::Network { source, .. } | SessionError::Api { source, .. } => {
                source.user_message()
            }
            SessionError::Storage { source, .. } => source.recovery_hint().to_string(),
            SessionError::Validation { source, .. } => match source {
                CoreError::Validation { field, message, .. } => format!("{field} {message}"),
                other => other.to_string(),
            },
            SessionError::NotReady { .. } => String::from("Session is still loading"),
        }
    }
}

impl From<TokenStoreError> for SessionError {
    #[track_caller]
    fn from(source: TokenStoreError) -> Self {
        SessionError::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for SessionError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        SessionError::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, SessionError>;
