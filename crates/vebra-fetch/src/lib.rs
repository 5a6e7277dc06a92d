//! Authenticated HTTP access to the Vebra property feed.
//!
//! This crate provides the request side of the client:
//!
//! - [`url`] - Route structs formatting the export API paths
//! - [`FeedClient`] - HTTP client bound to one data feed
//! - [`pipeline::execute`] - Token/basic authentication with one retry
//! - [`FeedApi`] - One method per feed operation, with token persistence

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/vebra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod client;
mod error;
pub mod pipeline;
pub mod url;

pub use api::FeedApi;
pub use client::{ClientConfig, FeedClient, http_date};
pub use error::{FeedError, Result};
pub use pipeline::{Attempt, AuthMode, Outcome, Request};
