//! The storage interface.

use std::sync::Arc;
use vebra_types::Token;

use crate::Result;

/// Durable home for the most recent session token.
///
/// Saves are last-write-wins and repeating a save with the same token
/// leaves the store unchanged.
pub trait TokenStore: Send + Sync {
    /// Loads the last saved token.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoToken`](crate::StoreError::NoToken) if nothing
    /// was saved, or an error if the stored value cannot be read.
    fn load(&self) -> Result<Token>;

    /// Saves `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be written.
    fn save(&self, token: &Token) -> Result<()>;
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn load(&self) -> Result<Token> {
        (**self).load()
    }

    fn save(&self, token: &Token) -> Result<()> {
        (**self).save(token)
    }
}
