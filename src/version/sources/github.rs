//! GitHub tags API source

use serde::Deserialize;

use crate::config::DEFAULT_GITHUB_API_URL;
use crate::version::error::CheckError;
use crate::version::semver::VersionFix;
use crate::version::source::Source;
use crate::version::sources::get;
use crate::version::types::FetchResult;

/// Response item from GitHub tags API
#[derive(Debug, Deserialize)]
struct Tag {
    name: String,
}

/// Source reading the tags of a GitHub repository
///
/// For https://github.com/tcnksm/ghr, `owner` is `tcnksm` and `repository`
/// is `ghr`. Each tag name is a version candidate.
#[derive(Debug, Clone)]
pub struct GitHubTagSource {
    owner: String,
    repository: String,
    fix: VersionFix,
    base_url: String,
    token: Option<String>,
}

impl GitHubTagSource {
    pub fn new(owner: &str, repository: &str) -> Self {
        Self {
            owner: owner.to_string(),
            repository: repository.to_string(),
            fix: VersionFix::default(),
            base_url: DEFAULT_GITHUB_API_URL.to_string(),
            token: None,
        }
    }

    /// Fix-up applied to tag names, e.g. [`VersionFix::delete_leading_v`]
    pub fn with_fix(mut self, fix: VersionFix) -> Self {
        self.fix = fix;
        self
    }

    /// API base URL, for GitHub Enterprise
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    fn tags_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/tags",
            self.base_url, self.owner, self.repository
        )
    }
}

#[async_trait::async_trait]
impl Source for GitHubTagSource {
    fn validate(&self) -> Result<(), CheckError> {
        if self.repository.is_empty() {
            return Err(CheckError::Config(
                "GitHub repository name must be set".to_string(),
            ));
        }

        if self.owner.is_empty() {
            return Err(CheckError::Config(
                "GitHub owner name must be set".to_string(),
            ));
        }

        reqwest::Url::parse(&self.tags_url())
            .map(|_| ())
            .map_err(|e| CheckError::Config(format!("invalid GitHub API URL: {}", e)))
    }

    async fn fetch(&self) -> Result<FetchResult, CheckError> {
        let url = self.tags_url();

        let response = get(&url, "application/vnd.github+json", self.token.as_deref()).await?;

        let tags: Vec<Tag> = response
            .json()
            .await
            .map_err(|e| CheckError::Decode(e.to_string()))?;

        if tags.is_empty() {
            return Err(CheckError::NotFound(format!(
                "no tags on {}/{}",
                self.owner, self.repository
            )));
        }

        Ok(FetchResult::from_candidates(
            tags.iter().map(|t| t.name.as_str()),
            &self.fix,
        ))
    }
}
