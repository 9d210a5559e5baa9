use serde::Serialize;

/// Outcome of running the route guard for one navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardDecision {
    /// Session still initializing: show a neutral loading state, redirect nowhere
    Defer,
    /// Render the requested view
    Allow,
    /// Nobody is signed in
    RedirectToLogin,
    /// Signed in, but the role is not sufficient
    RedirectToUnauthorized,
}

impl GuardDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::RedirectToLogin | Self::RedirectToUnauthorized)
    }
}
