use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {detail} (status: {status}) {location}")]
    Api {
        status: u16,
        detail: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, detail: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            detail: detail.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of an API error response
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            ClientError::Json { .. } => None,
        }
    }

    /// The server refused the credentials (401/403).
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Api { status: 401 | 403, .. })
    }

    /// Failures that may succeed if simply tried again later:
    /// transport errors, timeouts and 5xx responses.
    pub fn is_transient(&self) -> bool {
        match self {
            ClientError::Http { source, .. } => !source.is_builder(),
            ClientError::Api { status, .. } => *status >= 500,
            ClientError::Json { .. } => false,
        }
    }

    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { detail, .. } => detail.clone(),
            ClientError::Http { source, .. } if source.is_timeout() => {
                String::from("The server did not respond in time")
            }
            ClientError::Http { .. } => String::from("Could not reach the server"),
            ClientError::Json { .. } => String::from("The server sent an unexpected response"),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
