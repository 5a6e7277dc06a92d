//! One method per feed operation.

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};
use vebra_store::{StoreError, TokenStore};
use vebra_types::{
    Branch, BranchSummaries, BranchSummary, ChangedFileSummaries, ChangedFileSummary,
    ChangedPropertySummaries, ChangedPropertySummary, Credentials, Property, PropertySummaries,
    Record, Token,
};

use crate::pipeline::{self, Outcome, Request};
use crate::url::{self, AbsoluteUrl, Route};
use crate::{ClientConfig, FeedClient, Result};

/// Client for one Vebra data feed.
///
/// Cloning is cheap; clones share the HTTP connection pool, the
/// credentials and the token store.
#[derive(Clone)]
pub struct FeedApi {
    client: FeedClient,
    credentials: Arc<Credentials>,
    store: Arc<dyn TokenStore>,
}

impl FeedApi {
    /// Creates a client for `data_feed_id` with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        data_feed_id: impl Into<String>,
        credentials: Credentials,
        store: Arc<dyn TokenStore>,
    ) -> Result<Self> {
        Self::with_config(data_feed_id, credentials, store, ClientConfig::default())
    }

    /// Creates a client for `data_feed_id` with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(
        data_feed_id: impl Into<String>,
        credentials: Credentials,
        store: Arc<dyn TokenStore>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = FeedClient::new(data_feed_id, config)?;
        Ok(Self::from_client(client, credentials, store))
    }

    /// Wraps an existing HTTP client.
    #[must_use]
    pub fn from_client(
        client: FeedClient,
        credentials: Credentials,
        store: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            client,
            credentials: Arc::new(credentials),
            store,
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &FeedClient {
        &self.client
    }

    /// Stores `token` so the next request authenticates with it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot save the token.
    pub fn seed_token(&self, token: &Token) -> Result<()> {
        self.store.save(token)?;
        Ok(())
    }

    /// Lists the branches of the feed.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn branches(&self) -> Result<BranchSummaries> {
        self.execute(&url::Branches).await
    }

    /// Fetches the detail of a listed branch.
    ///
    /// The firm, branch and client ids of `summary` are copied onto the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns an error if the summary has no client id, the request fails
    /// or the body does not decode.
    pub async fn branch(&self, summary: &BranchSummary) -> Result<Branch> {
        let client_id = summary.client_id()?;
        let mut branch: Branch = self.execute(&url::Branch { client_id }).await?;
        branch.adopt_summary(summary)?;
        Ok(branch)
    }

    /// Fetches the detail of a branch by client id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn branch_by_client_id(&self, client_id: u32) -> Result<Branch> {
        self.execute(&url::Branch { client_id }).await
    }

    /// Lists the properties of a branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn properties(&self, client_id: u32) -> Result<PropertySummaries> {
        self.execute(&url::Properties { client_id }).await
    }

    /// Fetches one property.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn property(&self, client_id: u32, property_id: u32) -> Result<Property> {
        self.execute(&url::Property {
            client_id,
            property_id,
        })
        .await
    }

    /// Lists properties changed since `since`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn changed_properties(
        &self,
        since: DateTime<Utc>,
    ) -> Result<ChangedPropertySummaries> {
        self.execute(&url::ChangedProperties { since }).await
    }

    /// Lists files changed since `since`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn changed_files(&self, since: DateTime<Utc>) -> Result<ChangedFileSummaries> {
        self.execute(&url::ChangedFiles { since }).await
    }

    /// Fetches the property behind a change notification.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::PropertyDeleted`](crate::FeedError::PropertyDeleted)
    /// without making a request if the property was withdrawn, or an error
    /// if the request fails or the body does not decode.
    pub async fn changed_property(&self, summary: &ChangedPropertySummary) -> Result<Property> {
        if summary.is_deleted() {
            return Err(crate::FeedError::PropertyDeleted(summary.property_id));
        }
        self.execute(&AbsoluteUrl(summary.url.clone())).await
    }

    /// Fetches the property a changed file belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn property_from_changed_file(
        &self,
        summary: &ChangedFileSummary,
    ) -> Result<Property> {
        self.execute(&AbsoluteUrl(summary.prop_url.clone())).await
    }

    /// Fetches any route and decodes it as `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn execute<T: Record>(&self, route: &dyn Route) -> Result<T> {
        let request = Request::get(self.client.url(route));
        self.execute_request(&request).await.result
    }

    /// Fetches a route only if it changed after `since`.
    ///
    /// An unchanged resource yields an error for which
    /// [`FeedError::is_not_modified`](crate::FeedError::is_not_modified)
    /// returns true.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, nothing changed or the body
    /// does not decode.
    pub async fn execute_if_modified_since<T: Record>(
        &self,
        route: &dyn Route,
        since: DateTime<Utc>,
    ) -> Result<T> {
        let request = Request::get(self.client.url(route)).if_modified_since(since);
        self.execute_request(&request).await.result
    }

    /// Runs `request` through the pipeline and reports every attempt.
    ///
    /// The cached token is loaded first and any token the server issues is
    /// saved before returning, whatever the result.
    pub async fn execute_request<T: Record>(&self, request: &Request) -> Outcome<T> {
        let token = self.load_token();
        let outcome =
            pipeline::execute::<T>(&self.client, &self.credentials, request, token).await;

        if let Some(token) = &outcome.token_to_persist {
            self.persist_token(token);
        }
        if let Err(e) = &outcome.result {
            debug!(kind = T::KIND, url = %request.url, error = %e, "Feed call failed");
        }
        outcome
    }

    fn load_token(&self) -> Token {
        match self.store.load() {
            Ok(token) => token,
            Err(StoreError::NoToken) => Token::empty(),
            Err(e) => {
                warn!(error = %e, "Failed to load cached token, using credentials");
                Token::empty()
            }
        }
    }

    fn persist_token(&self, token: &Token) {
        match self.store.save(token) {
            Ok(()) => info!("Persisted new session token"),
            Err(e) => warn!(error = %e, "Failed to persist session token"),
        }
    }
}

impl fmt::Debug for FeedApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedApi")
            .field("client", &self.client)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
