//! Token persistence for the Vebra feed client.
//!
//! - [`TokenStore`] - load/save interface used by the request pipeline
//! - [`FileTokenStore`] - one base64 string in a file
//! - [`MemoryTokenStore`] - in-process store

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/vebra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod file;
mod memory;
mod store;

pub use error::{Result, StoreError};
pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;
pub use store::TokenStore;
