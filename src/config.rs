use std::path::Path;

use serde::Deserialize;

use crate::version::error::CheckError;
use crate::version::semver::VersionFix;
use crate::version::source::Source;
use crate::version::sources::{GitHubTagSource, HtmlMetaSource, HtmlSource, JsonSource};

// =============================================================================
// Network
// =============================================================================

/// Connect timeout for every request in seconds
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

/// User agent sent with every request (GitHub rejects requests without one)
pub const USER_AGENT: &str = concat!("latest/", env!("CARGO_PKG_VERSION"));

/// Default base URL for GitHub API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// `name` attribute of the meta tag carrying version information
pub const META_TAG_NAME: &str = "go-latest";

// =============================================================================
// Environment
// =============================================================================

/// Set to any non-empty value to skip checking entirely
pub const ENV_DISABLE: &str = "LATEST_DISABLE";

/// Set to any non-empty value to enable debug output
pub const ENV_DEBUG: &str = "LATEST_DEBUG";

/// Switches read from the process environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub disabled: bool,
    pub debug: bool,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let is_set = |key: &str| lookup(key).is_some_and(|v| !v.is_empty());

        Self {
            disabled: is_set(ENV_DISABLE),
            debug: is_set(ENV_DEBUG),
        }
    }
}

// =============================================================================
// Source configuration file
// =============================================================================

/// Source configuration, e.g. loaded from a JSON file
///
/// ```json
/// { "type": "github", "owner": "tcnksm", "repository": "ghr", "deleteLeadingV": true }
/// { "type": "json", "url": "https://example.com/version.json" }
/// { "type": "html", "url": "https://example.com/VERSION" }
/// { "type": "htmlMeta", "url": "https://example.com/", "name": "myapp" }
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SourceConfig {
    #[serde(rename_all = "camelCase")]
    Github {
        owner: String,
        repository: String,
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        token: Option<String>,
        #[serde(default)]
        delete_leading_v: bool,
    },
    Json {
        url: String,
    },
    Html {
        url: String,
    },
    HtmlMeta {
        url: String,
        name: String,
    },
}

impl SourceConfig {
    /// Reads a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, CheckError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CheckError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| CheckError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    pub fn into_source(self) -> Box<dyn Source> {
        match self {
            SourceConfig::Github {
                owner,
                repository,
                base_url,
                token,
                delete_leading_v,
            } => {
                let mut source = GitHubTagSource::new(&owner, &repository);
                if let Some(base_url) = base_url {
                    source = source.with_base_url(&base_url);
                }
                if let Some(token) = token {
                    source = source.with_token(&token);
                }
                if delete_leading_v {
                    source = source.with_fix(VersionFix::delete_leading_v());
                }
                Box::new(source)
            }
            SourceConfig::Json { url } => Box::new(JsonSource::new(&url)),
            SourceConfig::Html { url } => Box::new(HtmlSource::new(&url)),
            SourceConfig::HtmlMeta { url, name } => Box::new(HtmlMetaSource::new(&url, &name)),
        }
    }
}
