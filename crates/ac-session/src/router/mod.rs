pub(crate) mod view;

pub use view::View;

use crate::guard::{self, GuardDecision};
use crate::SessionStatus;

use serde::Serialize;

/// What to show for a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "view", rename_all = "snake_case")]
pub enum Navigation {
    /// Session still initializing
    Loading,
    Render(View),
    Redirect(View),
}

/// Route `path` through the guard.
///
/// `/` forwards to the dashboard; query strings, fragments and trailing
/// slashes are ignored.
pub fn navigate(status: &SessionStatus, path: &str) -> Navigation {
    if status.is_pending() {
        return Navigation::Loading;
    }

    let path = normalize_path(path);
    if path == "/" {
        return Navigation::Redirect(View::Dashboard);
    }

    let view = View::from_path(path);
    match guard::evaluate(status, view.requirement()) {
        GuardDecision::Defer => Navigation::Loading,
        GuardDecision::Allow => Navigation::Render(view),
        GuardDecision::RedirectToLogin => Navigation::Redirect(View::Login),
        GuardDecision::RedirectToUnauthorized => Navigation::Redirect(View::Unauthorized),
    }
}

pub(crate) fn normalize_path(path: &str) -> &str {
    let path = path.trim();
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim_end_matches('/');

    if path.is_empty() { "/" } else { path }
}
