//! Error types for token storage.

use std::path::PathBuf;
use thiserror::Error;
use vebra_types::TokenEncodingError;

/// Errors that can occur while loading or saving a token.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No token has been saved yet.
    #[error("No token has been stored")]
    NoToken,

    /// Failed to determine the application data directory.
    #[error("Failed to determine application data directory")]
    NoDataDir,

    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The stored value is not a valid encoded token.
    #[error("Stored token is invalid: {0}")]
    InvalidEncoding(#[from] TokenEncodingError),
}

impl StoreError {
    /// Returns true if the store is simply empty.
    #[must_use]
    pub const fn is_no_token(&self) -> bool {
        matches!(self, Self::NoToken)
    }
}

/// Result type for token storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
