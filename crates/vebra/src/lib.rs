//! Typed async client for the Vebra property data feed.
//!
//! This is a facade crate that re-exports functionality from the vebra
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use vebra::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = vebra::connect("MYFEEDID", "user", "password")?;
//!
//!     for summary in api.branches().await?.branches {
//!         let branch = api.branch(&summary).await?;
//!         for listed in api.properties(branch.client_id).await?.properties {
//!             let property = api.property(branch.client_id, listed.property_id).await?;
//!             println!("{} {}", property.address.display_line(), property.price.value.grouped());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/vebra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export record types
pub use vebra_types::*;

// Re-export token storage
pub use vebra_store::{FileTokenStore, MemoryTokenStore, StoreError, TokenStore};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use vebra_fetch::{
    Attempt, AuthMode, ClientConfig, FeedApi, FeedClient, FeedError, Outcome, Request,
    http_date, pipeline, url,
};

/// Connects to `data_feed_id`, keeping the session token in the default
/// token file.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
#[cfg(feature = "fetch")]
pub fn connect(
    data_feed_id: impl Into<String>,
    username: impl Into<String>,
    password: impl Into<String>,
) -> vebra_fetch::Result<FeedApi> {
    FeedApi::new(
        data_feed_id,
        Credentials::new(username, password),
        std::sync::Arc::new(FileTokenStore::with_default_path()),
    )
}

/// Prelude module for convenient imports.
///
/// ```
/// use vebra::prelude::*;
/// ```
pub mod prelude {
    pub use vebra_types::{
        Branch, BranchSummaries, BranchSummary, ChangedFileSummaries, ChangedFileSummary,
        ChangedPropertySummaries, ChangedPropertySummary, Credentials, Property,
        PropertySummaries, PropertySummary, Token,
    };

    pub use vebra_store::{FileTokenStore, MemoryTokenStore, TokenStore};

    #[cfg(feature = "fetch")]
    pub use vebra_fetch::{ClientConfig, FeedApi, FeedError};
}
