//! In-process token store.

use std::sync::{Mutex, PoisonError};
use vebra_types::{Token, TokenEncodingError};

use crate::{Result, StoreError, TokenStore};

/// Keeps the encoded token in memory for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    encoded: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `token`.
    #[must_use]
    pub fn with_token(token: &Token) -> Self {
        Self {
            encoded: Mutex::new(Some(token.encoded())),
        }
    }

    /// Returns the persisted form of the stored token, if any.
    #[must_use]
    pub fn encoded(&self) -> Option<String> {
        self.encoded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Token> {
        let Some(encoded) = self.encoded() else {
            return Err(StoreError::NoToken);
        };
        match Token::from_encoded(&encoded) {
            Ok(token) => Ok(token),
            Err(TokenEncodingError::Empty) => Err(StoreError::NoToken),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &Token) -> Result<()> {
        *self.encoded.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.encoded());
        Ok(())
    }
}
