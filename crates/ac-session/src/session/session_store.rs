use crate::guard::{self, GuardDecision, Requirement};
use crate::router::{self, Navigation};
use crate::session::error::{Result as SessionResult, SessionError};
use crate::session::session_state::SessionState;
use crate::session::session_status::SessionStatus;
use crate::token_store::TokenStore;
use crate::Client;

use ac_config::SessionConfig;
use ac_core::{Identity, Registration, TokenPair, validation};

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};
use tokio::sync::watch;

/// The application's single authenticated-session context.
///
/// Constructed once at startup and handed to every consumer; nothing about
/// the session lives in globals. State changes are published on a watch
/// channel so views can re-run the guard whenever the session moves.
pub struct SessionStore<T: TokenStore> {
    client: Client,
    tokens: T,
    keep_token_on_transient_failure: bool,
    state_tx: watch::Sender<SessionState>,
    initialize_claimed: AtomicBool,
}

impl<T: TokenStore> SessionStore<T> {
    pub fn new(client: Client, tokens: T) -> Self {
        let (state_tx, _) = watch::channel(SessionState::initial());

        Self {
            client,
            tokens,
            keep_token_on_transient_failure: SessionConfig::default()
                .keep_token_on_transient_failure,
            state_tx,
            initialize_claimed: AtomicBool::new(false),
        }
    }

    pub fn from_config(client: Client, tokens: T, config: &SessionConfig) -> Self {
        Self::new(client, tokens)
            .keep_token_on_transient_failure(config.keep_token_on_transient_failure)
    }

    /// Whether a startup identity check that fails for a transient reason
    /// (network error, timeout, 5xx) leaves the persisted token in place.
    pub fn keep_token_on_transient_failure(mut self, keep: bool) -> Self {
        self.keep_token_on_transient_failure = keep;
        self
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Resolve the persisted credential token, once per application lifetime.
    ///
    /// Never fails: any problem leaves the session anonymous. Later calls,
    /// including ones racing the first, return immediately; use
    /// [`wait_ready`](Self::wait_ready) to wait for the outcome.
    pub async fn initialize(&self) {
        if self.initialize_claimed.swap(true, Ordering::SeqCst) {
            debug!("Session initialization already claimed, skipping");
            return;
        }

        let sign_outs_before = self.state_tx.borrow().sign_outs;
        let resolved = self.resolve_persisted_session().await;

        self.state_tx.send_modify(|state| {
            match resolved {
                Some(_) if state.sign_outs != sign_outs_before => {
                    info!("Signed out during startup, discarding restored session");
                }
                Some((identity, tokens)) => state.sign_in(identity, tokens),
                None => {}
            }
            state.initializing = false;
        });
    }

    async fn resolve_persisted_session(&self) -> Option<(Identity, TokenPair)> {
        let tokens = match self.tokens.load() {
            Ok(Some(tokens)) => tokens,
            Ok(None) => {
                info!("No saved session, starting signed out");
                return None;
            }
            Err(e) => {
                warn!("Discarding unreadable saved session: {e}");
                self.erase_persisted_tokens();
                return None;
            }
        };

        match self.client.current_identity(&tokens.access_token).await {
            Ok(identity) => {
                info!("Restored session for user {}", identity.id);
                Some((identity, tokens))
            }
            Err(e) if e.is_transient() && self.keep_token_on_transient_failure => {
                warn!("Could not verify saved session, keeping it for the next start: {e}");
                None
            }
            Err(e) => {
                info!("Saved session no longer valid, signing out: {e}");
                self.erase_persisted_tokens();
                None
            }
        }
    }

    fn erase_persisted_tokens(&self) {
        if let Err(e) = self.tokens.clear() {
            warn!("Failed to erase saved session: {e}");
        }
    }

    /// Wait until startup resolution has finished.
    pub async fn wait_ready(&self) {
        let mut rx = self.state_tx.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(SessionState::is_ready).await;
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Sign in with email and password.
    ///
    /// The identity is resolved with the new token before anything is
    /// persisted, so on any failure neither the saved tokens nor the current
    /// identity change. No automatic retry.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<Identity> {
        if !self.is_ready() {
            return Err(SessionError::not_ready());
        }

        validation::require("email", email)?;
        validation::require("password", password)?;

        let tokens = self
            .client
            .login(email.trim(), password)
            .await
            .map_err(SessionError::from_login)?;

        let identity = self
            .client
            .current_identity(&tokens.access_token)
            .await
            .map_err(SessionError::from_client)?;

        self.tokens.save(&tokens)?;

        self.state_tx
            .send_modify(|state| state.sign_in(identity.clone(), tokens));

        info!("Signed in as user {}", identity.id);
        Ok(identity)
    }

    /// Forget the current identity and erase the saved tokens. No network call.
    ///
    /// The in-memory identity is cleared even when erasing the file fails.
    /// Allowed while initializing: a startup check still in flight is discarded.
    pub fn logout(&self) -> SessionResult<()> {
        self.state_tx.send_modify(SessionState::sign_out);
        self.tokens.clear()?;

        info!("Signed out");
        Ok(())
    }

    /// Create an account. Does not sign in.
    pub async fn register(&self, registration: &Registration) -> SessionResult<Identity> {
        registration.validate()?;

        let identity = self
            .client
            .register(registration)
            .await
            .map_err(SessionError::from_client)?;

        info!("Registered user {}", identity.id);
        Ok(identity)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn status(&self) -> SessionStatus {
        self.state_tx.borrow().status()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.state_tx.borrow().identity.clone()
    }

    /// Startup resolution has finished.
    pub fn is_ready(&self) -> bool {
        self.state_tx.borrow().is_ready()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state_tx.borrow().identity.is_some()
    }

    /// Bearer token confirmed for the current identity.
    pub fn access_token(&self) -> Option<String> {
        self.state_tx
            .borrow()
            .tokens
            .as_ref()
            .map(|tokens| tokens.access_token.clone())
    }

    /// Subscribe to session changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Run the route guard against the current session.
    pub fn check(&self, requirement: Requirement) -> GuardDecision {
        guard::evaluate(&self.status(), requirement)
    }

    /// Resolve a navigation to `path` against the current session.
    pub fn navigate(&self, path: &str) -> Navigation {
        router::navigate(&self.status(), path)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn token_store(&self) -> &T {
        &self.tokens
    }
}
