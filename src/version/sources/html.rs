//! HTML (or plain text) page source

use std::fmt;
use std::sync::Arc;

use crate::version::error::CheckError;
use crate::version::semver::VersionFix;
use crate::version::source::Source;
use crate::version::sources::{get, validate_url};
use crate::version::types::{FetchResult, Meta};

/// Candidates extracted from a page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scraped {
    pub versions: Vec<String>,
    pub meta: Option<Meta>,
}

/// Extracts version candidates from a page body
pub trait Scraper: Send + Sync {
    fn scrape(&self, body: &str) -> Result<Scraped, CheckError>;
}

/// Uses the whole trimmed body as the only candidate, for plain-text endpoints
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScraper;

impl Scraper for BodyScraper {
    fn scrape(&self, body: &str) -> Result<Scraped, CheckError> {
        let body = body.trim();
        let versions = if body.is_empty() {
            Vec::new()
        } else {
            vec![body.to_string()]
        };

        Ok(Scraped {
            versions,
            meta: None,
        })
    }
}

/// Source fetching a page and handing it to a [`Scraper`]
#[derive(Clone)]
pub struct HtmlSource {
    url: String,
    scraper: Arc<dyn Scraper>,
}

impl HtmlSource {
    /// Uses [`BodyScraper`] on the page at `url`
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            scraper: Arc::new(BodyScraper),
        }
    }

    pub fn with_scraper<S: Scraper + 'static>(mut self, scraper: S) -> Self {
        self.scraper = Arc::new(scraper);
        self
    }
}

impl fmt::Debug for HtmlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlSource")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl Source for HtmlSource {
    fn validate(&self) -> Result<(), CheckError> {
        validate_url(&self.url)
    }

    async fn fetch(&self) -> Result<FetchResult, CheckError> {
        let response = get(&self.url, "text/html", None).await?;

        let body = response
            .text()
            .await
            .map_err(|e| CheckError::Decode(e.to_string()))?;

        let scraped = self.scraper.scrape(&body)?;
        if scraped.versions.is_empty() {
            return Err(CheckError::NotFound(format!(
                "version info is not found on {}",
                self.url
            )));
        }

        Ok(FetchResult::from_candidates(scraped.versions, &VersionFix::default())
            .with_meta(scraped.meta))
    }
}
