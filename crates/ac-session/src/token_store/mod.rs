//! Durable storage for the credential tokens.
//!
//! Tokens live outside the session's lifecycle: written on login, erased on
//! logout, and read once when the session initializes.

pub(crate) mod error;
pub(crate) mod file_token_store;
pub(crate) mod memory_token_store;

pub use error::{Result as TokenStoreResult, TokenStoreError};
pub use file_token_store::FileTokenStore;
pub use memory_token_store::MemoryTokenStore;

use ac_core::TokenPair;

/// Where the access and refresh tokens are persisted.
///
/// Both tokens are always written and erased together.
pub trait TokenStore: Send + Sync {
    /// Read the persisted tokens, `None` when nothing is stored.
    fn load(&self) -> TokenStoreResult<Option<TokenPair>>;

    /// Replace the persisted tokens.
    fn save(&self, tokens: &TokenPair) -> TokenStoreResult<()>;

    /// Erase the persisted tokens. Clearing an empty store succeeds.
    fn clear(&self) -> TokenStoreResult<()>;
}
