//! Error types for feed requests.

use reqwest::StatusCode;
use thiserror::Error;
use vebra_store::StoreError;
use vebra_types::{ClientIdError, DecodeError};

/// Errors that can occur while fetching a record from the feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The request could not be sent or its body could not be read.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server kept rejecting our credentials.
    #[error("Authentication failed: {status} {reason}")]
    Authentication {
        /// HTTP status of the final response.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
    },

    /// The server answered with a status other than 200 or 401.
    #[error("Unexpected response: {status} {reason}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
    },

    /// The body did not decode into the requested record.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The token store failed.
    #[error("Token storage error: {0}")]
    Storage(#[from] StoreError),

    /// The property was withdrawn and has no detail to fetch.
    #[error("Property {0} has been deleted")]
    PropertyDeleted(u32),

    /// A URL returned by the feed carries no client id.
    #[error(transparent)]
    ClientId(#[from] ClientIdError),
}

impl FeedError {
    pub(crate) fn authentication(status: StatusCode) -> Self {
        Self::Authentication {
            status: status.as_u16(),
            reason: reason(status),
        }
    }

    pub(crate) fn unexpected_status(status: StatusCode) -> Self {
        Self::UnexpectedStatus {
            status: status.as_u16(),
            reason: reason(status),
        }
    }

    /// Returns the HTTP status behind the error, if there was a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } | Self::UnexpectedStatus { status, .. } => {
                Some(*status)
            }
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if a conditional request found nothing new.
    #[must_use]
    pub fn is_not_modified(&self) -> bool {
        self.status() == Some(StatusCode::NOT_MODIFIED.as_u16())
    }
}

fn reason(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}

/// Result type for feed requests.
pub type Result<T> = std::result::Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        let err = FeedError::authentication(StatusCode::UNAUTHORIZED);
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Authentication failed: 401 Unauthorized");

        let err = FeedError::unexpected_status(StatusCode::NOT_MODIFIED);
        assert!(err.is_not_modified());
        assert!(!FeedError::PropertyDeleted(7).is_not_modified());
        assert_eq!(FeedError::PropertyDeleted(7).status(), None);
    }
}
