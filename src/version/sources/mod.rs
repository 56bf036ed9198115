//! Source implementations for fetching version information

pub mod github;
pub mod html;
pub mod html_meta;
pub mod json;

pub use github::GitHubTagSource;
pub use html::{BodyScraper, HtmlSource, Scraped, Scraper};
pub use html_meta::{HtmlMetaSource, MetaTagScraper};
pub use json::{DefaultResponse, JsonSource, Receiver};

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};

use crate::config::{CONNECT_TIMEOUT_SECS, USER_AGENT};
use crate::version::error::CheckError;

/// Checks that `url` is set and parses as an absolute URL
fn validate_url(url: &str) -> Result<(), CheckError> {
    if url.is_empty() {
        return Err(CheckError::Config("URL must be set".to_string()));
    }

    reqwest::Url::parse(url)
        .map(|_| ())
        .map_err(|e| CheckError::Config(format!("{} is invalid URL: {}", url, e)))
}

/// Issues a GET request with a fresh client and fails on non-success status.
///
/// Each call builds its own client so independent checks share no connection
/// state. The proxy is taken from the environment by reqwest.
async fn get(
    url: &str,
    accept: &str,
    token: Option<&str>,
) -> Result<reqwest::Response, CheckError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()?;

    let mut request = client.get(url).header(ACCEPT, accept);
    if let Some(token) = token {
        request = request.header(AUTHORIZATION, format!("Bearer {}", token));
    }

    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CheckError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response)
}
