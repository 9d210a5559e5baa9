use ac_core::Identity;

use serde::Serialize;

/// What the rendering layer needs to know about the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "identity", rename_all = "snake_case")]
pub enum SessionStatus {
    /// Startup identity resolution has not finished yet
    Pending,
    /// A confirmed identity is signed in
    Authenticated(Identity),
    /// Resolution finished and nobody is signed in
    Anonymous,
}

impl SessionStatus {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Pending | Self::Anonymous => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}
