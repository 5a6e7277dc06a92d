//! Authenticated request pipeline.
//!
//! One call makes at most [`MAX_ATTEMPTS`] requests. Each attempt sends
//! the session token when one is valid and falls back to username and
//! password otherwise. A 401 invalidates the token, so a second attempt
//! always uses the password. Any `Token` response header replaces the
//! token and is handed back to the caller for persistence, whatever the
//! status.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName};
use std::fmt;
use tracing::{debug, warn};
use vebra_types::{Credentials, Record, Token, decode};

use crate::{FeedClient, FeedError};

/// Requests made per call before giving up on authentication.
pub const MAX_ATTEMPTS: usize = 2;

/// Response header carrying a freshly issued token (`Token`).
pub const TOKEN_HEADER: HeaderName = HeaderName::from_static("token");

/// How an attempt authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// The session token under the `Basic` scheme.
    Token,
    /// HTTP Basic with username and password.
    Basic,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token => f.write_str("token"),
            Self::Basic => f.write_str("basic"),
        }
    }
}

/// One HTTP request made by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// Requested URL.
    pub url: String,
    /// Authentication used.
    pub auth: AuthMode,
    /// Response status; `None` if no response arrived.
    pub status: Option<u16>,
}

/// A GET request to run through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Fully qualified URL.
    pub url: String,
    /// Sent as `If-Modified-Since` when set.
    pub if_modified_since: Option<DateTime<Utc>>,
}

impl Request {
    /// A plain GET of `url`.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            if_modified_since: None,
        }
    }

    /// Adds an `If-Modified-Since` condition.
    #[must_use]
    pub const fn if_modified_since(mut self, since: DateTime<Utc>) -> Self {
        self.if_modified_since = Some(since);
        self
    }
}

/// Everything a pipeline run produced.
#[derive(Debug)]
pub struct Outcome<T> {
    /// The decoded record or the reason there is none.
    pub result: Result<T, FeedError>,
    /// The last token the server issued during the run, if any.
    pub token_to_persist: Option<Token>,
    /// Requests made, in order.
    pub attempts: Vec<Attempt>,
}

/// Runs `request`, authenticating with `token` or `credentials`.
///
/// The token is owned by this call; the caller decides what to do with
/// [`Outcome::token_to_persist`].
pub async fn execute<T: Record>(
    client: &FeedClient,
    credentials: &Credentials,
    request: &Request,
    mut token: Token,
) -> Outcome<T> {
    let mut attempts = Vec::with_capacity(MAX_ATTEMPTS);
    let mut token_to_persist = None;
    let mut rejected = StatusCode::UNAUTHORIZED;

    for _ in 0..MAX_ATTEMPTS {
        let auth = if token.is_valid() {
            AuthMode::Token
        } else {
            AuthMode::Basic
        };

        let builder = client.get(&request.url, request.if_modified_since);
        let builder = match auth {
            AuthMode::Token => builder.header(AUTHORIZATION, token.authorization()),
            AuthMode::Basic => {
                builder.basic_auth(credentials.username(), Some(credentials.password()))
            }
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(url = %request.url, %auth, error = %e, "Feed request failed");
                attempts.push(Attempt {
                    url: request.url.clone(),
                    auth,
                    status: None,
                });
                return Outcome {
                    result: Err(FeedError::Transport(e)),
                    token_to_persist,
                    attempts,
                };
            }
        };

        let status = response.status();
        debug!(url = %request.url, %auth, status = status.as_u16(), "Feed request");
        attempts.push(Attempt {
            url: request.url.clone(),
            auth,
            status: Some(status.as_u16()),
        });

        if let Some(fresh) = issued_token(response.headers()) {
            token = fresh.clone();
            token_to_persist = Some(fresh);
        }

        match status {
            StatusCode::OK => {
                let result = match response.bytes().await {
                    Ok(body) => decode::<T>(&body).map_err(FeedError::from),
                    Err(e) => Err(FeedError::Transport(e)),
                };
                return Outcome {
                    result,
                    token_to_persist,
                    attempts,
                };
            }
            StatusCode::UNAUTHORIZED => {
                if auth == AuthMode::Token {
                    warn!(url = %request.url, "Token rejected, retrying with credentials");
                }
                token.invalidate();
                rejected = status;
            }
            other => {
                return Outcome {
                    result: Err(FeedError::unexpected_status(other)),
                    token_to_persist,
                    attempts,
                };
            }
        }
    }

    Outcome {
        result: Err(FeedError::authentication(rejected)),
        token_to_persist,
        attempts,
    }
}

fn issued_token(headers: &HeaderMap) -> Option<Token> {
    let value = headers.get(&TOKEN_HEADER)?.to_str().ok()?.trim();
    if value.is_empty() {
        return None;
    }
    Some(Token::issued(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_issued_token_from_header() {
        let mut headers = HeaderMap::new();
        assert!(issued_token(&headers).is_none());

        headers.insert(TOKEN_HEADER, HeaderValue::from_static("  "));
        assert!(issued_token(&headers).is_none());

        headers.insert(TOKEN_HEADER, HeaderValue::from_static("abc123"));
        let token = issued_token(&headers).unwrap();
        assert!(token.is_valid());
        assert_eq!(token.value(), "abc123");
    }

    #[test]
    fn test_request_builder() {
        let at = Utc::now();
        let request = Request::get("http://x/branch").if_modified_since(at);
        assert_eq!(request.url, "http://x/branch");
        assert_eq!(request.if_modified_since, Some(at));
    }

    #[test]
    fn test_auth_mode_display() {
        assert_eq!(AuthMode::Token.to_string(), "token");
        assert_eq!(AuthMode::Basic.to_string(), "basic");
    }
}
