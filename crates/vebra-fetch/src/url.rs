//! Feed URL construction.
//!
//! Every logical operation is a small route struct that formats one fixed
//! path template under a [`FeedRoot`].

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Default host of the export API.
pub const BASE_URL: &str = "http://webservices.vebra.com";

/// Default export API version.
pub const FEED_VERSION: u32 = 10;

/// Root of one data feed: `{base}/export/{data_feed_id}/v{version}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRoot {
    base_url: String,
    data_feed_id: String,
    version: u32,
}

impl FeedRoot {
    /// Creates a root on the default host and version.
    #[must_use]
    pub fn new(data_feed_id: impl Into<String>) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            data_feed_id: data_feed_id.into(),
            version: FEED_VERSION,
        }
    }

    /// Replaces the host, ignoring any trailing slash.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replaces the API version.
    #[must_use]
    pub const fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Returns the data feed id.
    #[must_use]
    pub fn data_feed_id(&self) -> &str {
        &self.data_feed_id
    }

    /// Returns the root URL without a trailing slash.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!(
            "{}/export/{}/v{}",
            self.base_url, self.data_feed_id, self.version
        )
    }
}

/// A logical feed operation that knows its URL.
pub trait Route: Send + Sync {
    /// Formats the fully qualified URL under `root`.
    fn url(&self, root: &FeedRoot) -> String;
}

/// All branches of the feed: `/branch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branches;

impl Route for Branches {
    fn url(&self, root: &FeedRoot) -> String {
        format!("{}/branch", root.prefix())
    }
}

/// One branch: `/branch/{client_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branch {
    /// Branch client id.
    pub client_id: u32,
}

impl Route for Branch {
    fn url(&self, root: &FeedRoot) -> String {
        format!("{}/branch/{}", root.prefix(), self.client_id)
    }
}

/// Properties of a branch: `/branch/{client_id}/property`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Properties {
    /// Branch client id.
    pub client_id: u32,
}

impl Route for Properties {
    fn url(&self, root: &FeedRoot) -> String {
        format!("{}/branch/{}/property", root.prefix(), self.client_id)
    }
}

/// One property: `/branch/{client_id}/property/{property_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    /// Branch client id.
    pub client_id: u32,
    /// Property id.
    pub property_id: u32,
}

impl Route for Property {
    fn url(&self, root: &FeedRoot) -> String {
        format!(
            "{}/branch/{}/property/{}",
            root.prefix(),
            self.client_id,
            self.property_id
        )
    }
}

/// Properties changed since a moment: `/property/YYYY/MM/DD/HH/mm/ss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangedProperties {
    /// Start of the change window.
    pub since: DateTime<Utc>,
}

impl Route for ChangedProperties {
    fn url(&self, root: &FeedRoot) -> String {
        format!("{}/property/{}", root.prefix(), since_path(self.since))
    }
}

/// Files changed since a moment: `/files/YYYY/MM/DD/HH/mm/ss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangedFiles {
    /// Start of the change window.
    pub since: DateTime<Utc>,
}

impl Route for ChangedFiles {
    fn url(&self, root: &FeedRoot) -> String {
        format!("{}/files/{}", root.prefix(), since_path(self.since))
    }
}

/// A link returned by the feed itself, used verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsoluteUrl(pub String);

impl Route for AbsoluteUrl {
    fn url(&self, _root: &FeedRoot) -> String {
        self.0.clone()
    }
}

/// Formats `since` as six zero-padded segments: `YYYY/MM/DD/HH/mm/ss`.
#[must_use]
pub fn since_path(since: DateTime<Utc>) -> String {
    format!(
        "{:04}/{:02}/{:02}/{:02}/{:02}/{:02}",
        since.year(),
        since.month(),
        since.day(),
        since.hour(),
        since.minute(),
        since.second()
    )
}
