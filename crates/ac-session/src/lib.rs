//! Client-side session gate for the admin console.
//!
//! [`SessionStore`] owns the signed-in identity and the credential tokens,
//! [`guard::evaluate`] decides whether a view may render, and [`Client`]
//! talks to the remote REST API.

pub mod client;
pub mod guard;
pub mod router;
pub mod session;
pub mod token_store;

#[cfg(test)]
mod tests;

pub use client::{Client, ClientError, ClientResult};
pub use guard::{GuardDecision, Requirement};
pub use router::{Navigation, View};
pub use session::{SessionError, SessionResult, SessionState, SessionStatus, SessionStore};
pub use token_store::{
    FileTokenStore, MemoryTokenStore, TokenStore, TokenStoreError, TokenStoreResult,
};
