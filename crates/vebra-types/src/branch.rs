//! Branch records.

use serde::Deserialize;

use crate::{ClientIdError, FeedDate};

/// Branches visible to a data feed (`GET /branch`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BranchSummaries {
    /// One entry per branch.
    #[serde(rename = "branch", default)]
    pub branches: Vec<BranchSummary>,
}

/// A branch as listed by the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BranchSummary {
    /// Branch name.
    pub name: String,
    /// Firm identifier.
    #[serde(rename = "firmid", deserialize_with = "crate::scalar::lenient_int")]
    pub firm_id: i64,
    /// Branch identifier within the firm.
    #[serde(rename = "branchid", deserialize_with = "crate::scalar::lenient_int")]
    pub branch_id: i64,
    /// Link to the branch detail.
    pub url: String,
}

impl BranchSummary {
    /// Returns the client id, the trailing path segment of [`Self::url`].
    ///
    /// # Errors
    ///
    /// Returns an error if the last segment is not a number.
    pub fn client_id(&self) -> Result<u32, ClientIdError> {
        let segment = self.client_id_str();
        segment.parse().map_err(|_| ClientIdError::new(&self.url))
    }

    /// Returns the trailing path segment of [`Self::url`] without parsing it.
    #[must_use]
    pub fn client_id_str(&self) -> &str {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }
}

/// Contact details of a branch (`GET /branch/{clientid}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Branch {
    /// Client id used in property requests.
    #[serde(rename = "clientid", deserialize_with = "crate::scalar::lenient_int")]
    pub client_id: u32,
    /// Firm identifier.
    #[serde(
        rename = "FirmID",
        alias = "firmid",
        deserialize_with = "crate::scalar::lenient_int"
    )]
    pub firm_id: i64,
    /// Branch identifier within the firm.
    #[serde(
        rename = "BranchID",
        alias = "branchid",
        deserialize_with = "crate::scalar::lenient_int"
    )]
    pub branch_id: i64,
    /// Branch name.
    pub name: String,
    /// Link to this record.
    pub url: String,
    /// Street.
    pub street: String,
    /// Town.
    pub town: String,
    /// County.
    pub county: String,
    /// Postcode.
    pub postcode: String,
    /// Telephone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// When the record was fetched, if the feed reports it.
    #[serde(rename = "queriedat")]
    pub queried_at: FeedDate,
}

impl Branch {
    /// Copies the identifiers of the summary this branch was fetched for.
    ///
    /// The detail payload does not always repeat them, so the listing is
    /// taken as authoritative.
    ///
    /// # Errors
    ///
    /// Returns an error if the summary's URL carries no client id.
    pub fn adopt_summary(&mut self, summary: &BranchSummary) -> Result<(), ClientIdError> {
        self.firm_id = summary.firm_id;
        self.branch_id = summary.branch_id;
        self.client_id = summary.client_id()?;
        Ok(())
    }
}
