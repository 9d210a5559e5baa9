//! Route guard: decides whether a view may render for the current session.
//!
//! Stateless; re-run it on every navigation and every session change.

pub(crate) mod guard_decision;
pub(crate) mod requirement;

pub use guard_decision::GuardDecision;
pub use requirement::Requirement;

use crate::SessionStatus;

pub fn evaluate(status: &SessionStatus, requirement: Requirement) -> GuardDecision {
    match (status, requirement) {
        (SessionStatus::Pending, _) => GuardDecision::Defer,
        (_, Requirement::Public) => GuardDecision::Allow,
        (SessionStatus::Anonymous, _) => GuardDecision::RedirectToLogin,
        (SessionStatus::Authenticated(identity), Requirement::Admin) if !identity.is_admin() => {
            GuardDecision::RedirectToUnauthorized
        }
        (SessionStatus::Authenticated(_), _) => GuardDecision::Allow,
    }
}
