//! JSON endpoint source

use std::fmt;
use std::marker::PhantomData;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::version::error::CheckError;
use crate::version::semver::VersionFix;
use crate::version::source::Source;
use crate::version::sources::{get, validate_url};
use crate::version::types::{FetchResult, Meta};

/// Shape of a JSON response carrying version information
///
/// Implement it for your own response type to read arbitrary JSON documents.
/// Returned strings must be semantic versions; fix them up here if needed.
pub trait Receiver: DeserializeOwned + Send + Sync {
    /// Version strings found in the response
    ///
    /// Return `CheckError::Decode` when the response has an unusable shape.
    fn version_info(&self) -> Result<Vec<String>, CheckError>;

    /// Metadata found in the response
    fn meta_info(&self) -> Result<Option<Meta>, CheckError> {
        Ok(None)
    }
}

/// Default response: `{"version": "1.2.3", "message": "...", "url": "..."}`
///
/// Only `version` is required.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DefaultResponse {
    pub version: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Receiver for DefaultResponse {
    fn version_info(&self) -> Result<Vec<String>, CheckError> {
        if self.version.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![self.version.clone()])
        }
    }

    fn meta_info(&self) -> Result<Option<Meta>, CheckError> {
        let meta = Meta {
            message: self.message.clone().unwrap_or_default(),
            url: self.url.clone().unwrap_or_default(),
        };
        Ok((!meta.is_empty()).then_some(meta))
    }
}

/// Source reading a JSON document from a URL
pub struct JsonSource<R = DefaultResponse> {
    url: String,
    receiver: PhantomData<fn() -> R>,
}

impl JsonSource<DefaultResponse> {
    /// Expects `{"version": "..."}` at `url`
    pub fn new(url: &str) -> Self {
        Self::with_receiver(url)
    }
}

impl<R: Receiver> JsonSource<R> {
    /// Decodes the response at `url` into `R`
    pub fn with_receiver(url: &str) -> Self {
        Self {
            url: url.to_string(),
            receiver: PhantomData,
        }
    }
}

impl<R> Clone for JsonSource<R> {
    fn clone(&self) -> Self {
        Self {
            url: self.url.clone(),
            receiver: PhantomData,
        }
    }
}

impl<R> fmt::Debug for JsonSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSource")
            .field("url", &self.url)
            .field("receiver", &std::any::type_name::<R>())
            .finish()
    }
}

#[async_trait::async_trait]
impl<R: Receiver> Source for JsonSource<R> {
    fn validate(&self) -> Result<(), CheckError> {
        validate_url(&self.url)
    }

    async fn fetch(&self) -> Result<FetchResult, CheckError> {
        let response = get(&self.url, "application/json", None).await?;

        let body = response
            .bytes()
            .await
            .map_err(|e| CheckError::Decode(e.to_string()))?;

        let received: R =
            serde_json::from_slice(&body).map_err(|e| CheckError::Decode(e.to_string()))?;

        let versions = received.version_info()?;
        if versions.is_empty() {
            return Err(CheckError::NotFound(format!(
                "version info is not found on {}",
                self.url
            )));
        }

        let meta = received.meta_info()?;

        Ok(FetchResult::from_candidates(versions, &VersionFix::default()).with_meta(meta))
    }
}
