//! Generic XML decoding of feed responses.

use serde::de::DeserializeOwned;

use crate::{
    Branch, BranchSummaries, ChangedFileSummaries, ChangedPropertySummaries, DecodeError,
    Property, PropertySummaries,
};

/// A top-level document returned by the feed.
pub trait Record: DeserializeOwned {
    /// Human-readable kind, used in errors and logs.
    const KIND: &'static str;
}

impl Record for BranchSummaries {
    const KIND: &'static str = "branch list";
}

impl Record for Branch {
    const KIND: &'static str = "branch";
}

impl Record for PropertySummaries {
    const KIND: &'static str = "property list";
}

impl Record for Property {
    const KIND: &'static str = "property";
}

impl Record for ChangedPropertySummaries {
    const KIND: &'static str = "changed property list";
}

impl Record for ChangedFileSummaries {
    const KIND: &'static str = "changed file list";
}

/// Decodes a response body into `T`.
///
/// A leading byte order mark is ignored.
///
/// # Errors
///
/// Returns an error if the body is not UTF-8 or does not have the shape of `T`.
pub fn decode<T: Record>(body: &[u8]) -> Result<T, DecodeError> {
    let body = body.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(body);
    let text = std::str::from_utf8(body).map_err(|source| DecodeError::Utf8 {
        kind: T::KIND,
        source,
    })?;
    quick_xml::de::from_str(text).map_err(|source| DecodeError::Xml {
        kind: T::KIND,
        source,
    })
}
