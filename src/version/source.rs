//! Source trait for fetching version information from a remote medium

#[cfg(test)]
use mockall::automock;

use crate::version::error::CheckError;
use crate::version::types::FetchResult;

/// A place that publishes version information, e.g. GitHub tags or a JSON endpoint
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    /// Checks the configuration without touching the network
    ///
    /// # Returns
    /// * `Err(CheckError::Config)` - If a mandatory field is missing or malformed
    fn validate(&self) -> Result<(), CheckError>;

    /// Fetches version candidates and normalizes them
    ///
    /// Candidates that fail to parse are collected in `FetchResult::malformed`.
    /// Only `validate`d sources may be fetched.
    ///
    /// # Returns
    /// * `Ok(FetchResult)` - Parsed versions, malformed candidates and metadata
    /// * `Err(CheckError)` - Transport failure, unexpected status, undecodable
    ///   body or no candidate at all
    async fn fetch(&self) -> Result<FetchResult, CheckError>;
}
