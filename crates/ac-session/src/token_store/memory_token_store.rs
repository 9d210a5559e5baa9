use crate::token_store::{TokenStore, TokenStoreResult};

use ac_core::TokenPair;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-process token storage; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out with tokens already "persisted"
    pub fn with_tokens(tokens: TokenPair) -> Self {
        Self {
            tokens: Mutex::new(Some(tokens)),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<TokenPair>> {
        self.tokens.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> TokenStoreResult<Option<TokenPair>> {
        Ok(self.slot().clone())
    }

    fn save(&self, tokens: &TokenPair) -> TokenStoreResult<()> {
        *self.slot() = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> TokenStoreResult<()> {
        *self.slot() = None;
        Ok(())
    }
}
