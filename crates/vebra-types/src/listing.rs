//! Property listings and change feeds.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::{ClientIdError, FeedDate, PropertyAction, SanitizedBool};

static BRANCH_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"branch/(\d+)/").expect("branch segment pattern compiles"));

/// Properties of one branch (`GET /branch/{clientid}/property`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PropertySummaries {
    /// One entry per property.
    #[serde(rename = "property", default)]
    pub properties: Vec<PropertySummary>,
}

/// A property as listed under its branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PropertySummary {
    /// Property identifier.
    #[serde(rename = "prop_id", deserialize_with = "crate::scalar::lenient_int")]
    pub property_id: u32,
    /// When the property last changed.
    #[serde(rename = "lastchanged")]
    pub last_changed: FeedDate,
    /// Link to the property detail.
    pub url: String,
}

/// Properties changed since a point in time (`GET /property/{since}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChangedPropertySummaries {
    /// One entry per changed property.
    #[serde(rename = "property", default)]
    pub properties: Vec<ChangedPropertySummary>,
}

/// A property change notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChangedPropertySummary {
    /// Property identifier.
    #[serde(rename = "propid", deserialize_with = "crate::scalar::lenient_int")]
    pub property_id: u32,
    /// When the change happened.
    #[serde(rename = "lastchanged")]
    pub last_changed: FeedDate,
    /// Link to the property detail.
    pub url: String,
    /// Whether the property was updated or withdrawn.
    pub action: PropertyAction,
}

impl ChangedPropertySummary {
    /// Returns the client id of the owning branch, taken from the
    /// `branch/{id}/` segment of [`Self::url`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URL has no such segment.
    pub fn client_id(&self) -> Result<u32, ClientIdError> {
        BRANCH_SEGMENT
            .captures(&self.url)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(|| ClientIdError::new(&self.url))
    }

    /// Returns true if the property was withdrawn.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.action == PropertyAction::Deleted
    }
}

/// Files changed since a point in time (`GET /files/{since}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChangedFileSummaries {
    /// One entry per changed file.
    #[serde(rename = "file", default)]
    pub files: Vec<ChangedFileSummary>,
}

/// A file change notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChangedFileSummary {
    /// File identifier.
    #[serde(rename = "file_id", deserialize_with = "crate::scalar::lenient_int")]
    pub file_id: i64,
    /// Identifier of the owning property.
    #[serde(rename = "file_propid", deserialize_with = "crate::scalar::lenient_int")]
    pub property_id: u32,
    /// When the file changed.
    pub updated: FeedDate,
    /// Whether the file was removed.
    pub deleted: SanitizedBool,
    /// Link to the file itself.
    pub url: String,
    /// Link to the owning property.
    pub prop_url: String,
}

impl ChangedFileSummary {
    /// Returns true if the file was removed.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changed(url: &str, action: PropertyAction) -> ChangedPropertySummary {
        ChangedPropertySummary {
            property_id: 29_015_446,
            last_changed: FeedDate::NONE,
            url: url.to_string(),
            action,
        }
    }

    #[test]
    fn test_changed_property_client_id() {
        let summary = changed(
            "http://webservices.vebra.com/export/FEED/v10/branch/3741/property/29015446",
            PropertyAction::Updated,
        );
        assert_eq!(summary.client_id().unwrap(), 3741);
        assert!(!summary.is_deleted());
    }

    #[test]
    fn test_empty_ids_decode_as_zero() {
        let listing: PropertySummaries = crate::decode(
            b"<properties><property><prop_id></prop_id><url>http://x</url></property></properties>",
        )
        .unwrap();
        assert_eq!(listing.properties[0].property_id, 0);

        let changed: ChangedPropertySummaries = crate::decode(
            b"<propertieschanged><property><propid/><action>deleted</action></property>\
              </propertieschanged>",
        )
        .unwrap();
        assert_eq!(changed.properties[0].property_id, 0);
        assert!(changed.properties[0].is_deleted());

        let files: ChangedFileSummaries = crate::decode(
            b"<files><file><file_id></file_id><file_propid></file_propid>\
              <deleted>true</deleted><url>http://images.vebra.com/2.jpg</url></file></files>",
        )
        .unwrap();
        assert_eq!((files.files[0].file_id, files.files[0].property_id), (0, 0));
        assert!(files.files[0].is_deleted());
    }

    #[test]
    fn test_id_out_of_range_is_rejected() {
        let err = crate::decode::<PropertySummaries>(
            b"<properties><property><prop_id>-1</prop_id></property></properties>",
        )
        .unwrap_err();
        assert_eq!(err.kind(), "property list");
    }

    #[test]
    fn test_changed_property_without_branch() {
        let summary = changed(
            "http://webservices.vebra.com/export/FEED/v10/property/29015446",
            PropertyAction::Deleted,
        );
        assert!(summary.client_id().is_err());
        assert!(summary.is_deleted());
    }
}
