//! Error types for vebra records.

use thiserror::Error;

/// Errors that can occur while decoding a response body into a record.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The body is not valid UTF-8.
    #[error("{kind} body is not valid UTF-8: {source}")]
    Utf8 {
        /// The record kind being decoded.
        kind: &'static str,
        /// The underlying UTF-8 error.
        source: std::str::Utf8Error,
    },

    /// The body is not XML of the expected shape.
    #[error("{kind} body does not match the expected XML: {source}")]
    Xml {
        /// The record kind being decoded.
        kind: &'static str,
        /// The underlying deserializer error.
        source: quick_xml::DeError,
    },
}

impl DecodeError {
    /// Returns the kind of record that failed to decode.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Utf8 { kind, .. } | Self::Xml { kind, .. } => kind,
        }
    }
}

/// Error for a scalar value the lenient decoders cannot make sense of.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScalarError {
    /// Not an integer in any accepted notation.
    #[error("Invalid integer: {0:?}")]
    InvalidInt(String),

    /// Not a recognised boolean spelling.
    #[error("Invalid boolean: {0:?}")]
    InvalidBool(String),

    /// Not a decimal number.
    #[error("Invalid number: {0:?}")]
    InvalidFloat(String),
}

/// Error for a URL that does not carry a branch client id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No client id in URL: {url}")]
pub struct ClientIdError {
    /// The URL that was inspected.
    pub url: String,
}

impl ClientIdError {
    pub(crate) fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

/// Errors for a persisted token that cannot be turned back into a token.
#[derive(Error, Debug)]
pub enum TokenEncodingError {
    /// The persisted value is not base64.
    #[error("Token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not UTF-8.
    #[error("Token is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The persisted value is empty.
    #[error("Token is empty")]
    Empty,
}
