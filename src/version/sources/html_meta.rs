//! HTML meta tag source
//!
//! Reads version information from a meta tag of the form:
//!
//! ```html
//! <meta name="go-latest" content="myapp 2.0.0 upgrade now">
//! ```
//!
//! `content` holds the product name, its version and an optional message,
//! separated by spaces.

use scraper::{Html, Selector};

use crate::config::META_TAG_NAME;
use crate::version::error::CheckError;
use crate::version::source::Source;
use crate::version::sources::html::{HtmlSource, Scraped, Scraper};
use crate::version::types::{FetchResult, Meta};

/// Source reading the meta tag of product `name` from an HTML page
#[derive(Debug, Clone)]
pub struct HtmlMetaSource {
    url: String,
    name: String,
}

impl HtmlMetaSource {
    pub fn new(url: &str, name: &str) -> Self {
        Self {
            url: url.to_string(),
            name: name.to_string(),
        }
    }

    fn html(&self) -> HtmlSource {
        HtmlSource::new(&self.url).with_scraper(MetaTagScraper::new(&self.name))
    }
}

#[async_trait::async_trait]
impl Source for HtmlMetaSource {
    fn validate(&self) -> Result<(), CheckError> {
        if self.name.is_empty() {
            return Err(CheckError::Config("product name must be set".to_string()));
        }
        self.html().validate()
    }

    async fn fetch(&self) -> Result<FetchResult, CheckError> {
        self.html().fetch().await
    }
}

/// Finds the first `go-latest` meta tag whose product matches `name`
#[derive(Debug, Clone)]
pub struct MetaTagScraper {
    name: String,
}

impl MetaTagScraper {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Content of a `go-latest` meta tag
#[derive(Debug, PartialEq, Eq)]
struct MetaContent<'a> {
    product: &'a str,
    version: &'a str,
    message: &'a str,
}

fn parse_content(content: &str) -> Option<MetaContent<'_>> {
    let mut parts = content.trim().splitn(3, ' ');
    let product = parts.next()?;
    let version = parts.next()?;
    let message = parts.next().unwrap_or_default();

    Some(MetaContent {
        product,
        version,
        message,
    })
}

impl Scraper for MetaTagScraper {
    fn scrape(&self, body: &str) -> Result<Scraped, CheckError> {
        let document = Html::parse_document(body);
        let selector = Selector::parse("meta").map_err(|e| CheckError::Decode(e.to_string()))?;

        // First match wins; one tag per product is assumed
        let found = document
            .select(&selector)
            .filter(|el| el.value().attr("name") == Some(META_TAG_NAME))
            .filter_map(|el| el.value().attr("content"))
            .filter_map(parse_content)
            .find(|content| content.product == self.name);

        match found {
            Some(content) => Ok(Scraped {
                versions: vec![content.version.to_string()],
                meta: (!content.message.is_empty()).then(|| Meta::with_message(content.message)),
            }),
            None => Err(CheckError::NotFound(format!(
                "meta tag for {} is not found",
                self.name
            ))),
        }
    }
}
