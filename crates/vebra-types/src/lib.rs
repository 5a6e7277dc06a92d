//! Record types for the Vebra property feed.
//!
//! - [`BranchSummaries`], [`Branch`] - branches visible to a data feed
//! - [`PropertySummaries`], [`Property`] - listings and full property detail
//! - [`ChangedPropertySummaries`], [`ChangedFileSummaries`] - change feeds
//! - [`Token`], [`Credentials`] - authentication material
//! - [`decode`] - XML body to record

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/vebra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod branch;
mod codes;
mod decode;
mod error;
mod listing;
mod property;
mod scalar;
mod token;

pub use branch::{Branch, BranchSummaries, BranchSummary};
pub use codes::{
    FileKind, Furnished, LetType, ParagraphKind, PriceQualifier, PropertyAction, RentPeriod,
    WebStatus,
};
pub use decode::{Record, decode};
pub use error::{ClientIdError, DecodeError, ScalarError, TokenEncodingError};
pub use listing::{
    ChangedFileSummaries, ChangedFileSummary, ChangedPropertySummaries, ChangedPropertySummary,
    PropertySummaries, PropertySummary,
};
pub use property::{
    Address, Area, Bullet, Dimensions, EnergyPerformance, EnergyRating, FileRef, Paragraph,
    Price, Property, PropertyFile, Reference, StreetView,
};
pub use scalar::{FeedDate, SanitizedBool, SanitizedFloat, SanitizedInt};
pub use token::{Credentials, Token};
