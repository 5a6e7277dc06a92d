//! HTTP client for the export API.

use chrono::{DateTime, Utc};
use reqwest::header::IF_MODIFIED_SINCE;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

use crate::url::{BASE_URL, FEED_VERSION, FeedRoot, Route};

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host of the export API.
    pub base_url: String,
    /// Export API version.
    pub feed_version: u32,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            feed_version: FEED_VERSION,
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("vebra/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// HTTP client bound to one data feed.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    root: FeedRoot,
    config: ClientConfig,
}

impl FeedClient {
    /// Creates a client for `data_feed_id` with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        data_feed_id: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        let root = FeedRoot::new(data_feed_id)
            .with_base_url(config.base_url.as_str())
            .with_version(config.feed_version);
        Ok(Self {
            client,
            root,
            config,
        })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults(data_feed_id: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::new(data_feed_id, ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the feed root URLs are built under.
    #[must_use]
    pub const fn root(&self) -> &FeedRoot {
        &self.root
    }

    /// Returns the URL of `route` under this client's feed.
    #[must_use]
    pub fn url(&self, route: &dyn Route) -> String {
        route.url(&self.root)
    }

    /// Starts a GET request, adding `If-Modified-Since` when given.
    pub(crate) fn get(
        &self,
        url: &str,
        if_modified_since: Option<DateTime<Utc>>,
    ) -> RequestBuilder {
        let request = self.client.get(url);
        match if_modified_since {
            Some(since) => request.header(IF_MODIFIED_SINCE, http_date(since)),
            None => request,
        }
    }
}

/// Formats a timestamp as an HTTP date (`Sun, 06 Nov 1994 08:49:37 GMT`).
#[must_use]
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::Branches;
    use chrono::TimeZone;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://webservices.vebra.com");
        assert_eq!(config.feed_version, 10);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("vebra/"));
    }

    #[test]
    fn test_client_uses_configured_root() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9999".to_string(),
            ..ClientConfig::default()
        };
        let client = FeedClient::new("FEED", config).unwrap();
        assert_eq!(client.url(&Branches), "http://127.0.0.1:9999/export/FEED/v10/branch");
    }

    #[test]
    fn test_http_date() {
        let at = Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37).unwrap();
        assert_eq!(http_date(at), "Sun, 06 Nov 1994 08:49:37 GMT");
    }
}
