use crate::session::session_status::SessionStatus;

use ac_core::{Identity, TokenPair};

/// Snapshot published to session subscribers.
///
/// `identity` and `tokens` are always set and cleared together, so the
/// identity is present only while a confirmed token backs it.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub(crate) identity: Option<Identity>,
    pub(crate) tokens: Option<TokenPair>,
    pub(crate) initializing: bool,
    /// Bumped by every sign-out, so a slow startup check can tell it was overtaken
    pub(crate) sign_outs: u64,
}

impl SessionState {
    pub(crate) fn initial() -> Self {
        Self {
            identity: None,
            tokens: None,
            initializing: true,
            sign_outs: 0,
        }
    }

    pub(crate) fn sign_in(&mut self, identity: Identity, tokens: TokenPair) {
        self.identity = Some(identity);
        self.tokens = Some(tokens);
    }

    pub(crate) fn sign_out(&mut self) {
        self.identity = None;
        self.tokens = None;
        self.sign_outs += 1;
    }

    pub fn status(&self) -> SessionStatus {
        if self.initializing {
            return SessionStatus::Pending;
        }

        match &self.identity {
            Some(identity) => SessionStatus::Authenticated(identity.clone()),
            None => SessionStatus::Anonymous,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        !self.initializing
    }
}
