//! Authentication material: account credentials and the session token.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::TokenEncodingError;

/// Feed account username and password.
///
/// The password is never printed by `Debug`.
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    /// Creates credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Session token issued by the feed in the `Token` response header.
///
/// A valid token is sent instead of the account password. The token is
/// invalidated when the server rejects it, which forces the next request
/// back onto username/password authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    value: String,
    valid: bool,
    acquired_at: DateTime<Utc>,
}

impl Token {
    /// A token freshly issued by the server. Empty values are never valid.
    #[must_use]
    pub fn issued(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            valid: !value.is_empty(),
            value,
            acquired_at: Utc::now(),
        }
    }

    /// The "no token" state.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            value: String::new(),
            valid: false,
            acquired_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Restores a token from its persisted form.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not base64 of a non-empty UTF-8 string.
    pub fn from_encoded(encoded: &str) -> Result<Self, TokenEncodingError> {
        let bytes = STANDARD.decode(encoded.trim())?;
        let value = String::from_utf8(bytes)?;
        if value.is_empty() {
            return Err(TokenEncodingError::Empty);
        }
        Ok(Self::issued(value))
    }

    /// Returns true if the token may be sent.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Marks the token as rejected and drops its value.
    pub fn invalidate(&mut self) {
        self.valid = false;
        self.value.clear();
    }

    /// Returns the raw token.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns when the token was issued or restored.
    #[must_use]
    pub const fn acquired_at(&self) -> DateTime<Utc> {
        self.acquired_at
    }

    /// Returns the persisted form: base64 of the raw token.
    #[must_use]
    pub fn encoded(&self) -> String {
        STANDARD.encode(self.value.as_bytes())
    }

    /// Returns the `Authorization` header value for this token.
    ///
    /// The feed expects the token under the `Basic` scheme.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Basic {}", self.encoded())
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("value", &"[REDACTED]")
            .field("valid", &self.valid)
            .field("acquired_at", &self.acquired_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_token_is_valid() {
        let token = Token::issued("abc123");
        assert!(token.is_valid());
        assert_eq!(token.value(), "abc123");
        assert!(!Token::issued("").is_valid());
        assert!(!Token::empty().is_valid());
    }

    #[test]
    fn test_invalidate_clears_value() {
        let mut token = Token::issued("abc123");
        token.invalidate();
        assert!(!token.is_valid());
        assert_eq!(token.value(), "");
    }

    #[test]
    fn test_authorization_header() {
        let token = Token::issued("abc123");
        assert_eq!(token.encoded(), "YWJjMTIz");
        assert_eq!(token.authorization(), "Basic YWJjMTIz");
    }

    #[test]
    fn test_encoded_round_trip() {
        let token = Token::issued("f0e1d2c3-token");
        let restored = Token::from_encoded(&format!("{}\n", token.encoded())).unwrap();
        assert_eq!(restored.value(), token.value());
        assert!(restored.is_valid());
        assert_eq!(restored.authorization(), token.authorization());
    }

    #[test]
    fn test_from_encoded_rejects_bad_input() {
        assert!(matches!(
            Token::from_encoded("!!not base64!!"),
            Err(TokenEncodingError::Base64(_))
        ));
        assert!(matches!(Token::from_encoded(""), Err(TokenEncodingError::Empty)));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("user", "hunter2");
        let token = Token::issued("abc123");
        assert!(!format!("{creds:?}").contains("hunter2"));
        assert!(!format!("{token:?}").contains("abc123"));
        assert_eq!(creds.password(), "hunter2");
    }
}
