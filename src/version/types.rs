//! Common types for version checking

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::version::semver::{VersionFix, compare_precedence, normalize};

/// Free-form information a source attaches to its versions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Message for users, e.g. "upgrade now"
    #[serde(default)]
    pub message: String,
    /// Where to download or read about the current version
    #[serde(default)]
    pub url: String,
}

impl Meta {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            url: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.url.is_empty()
    }
}

/// Versions retrieved by a single fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResult {
    /// Candidates that parsed as semantic versions, in source order
    pub versions: Vec<Version>,
    /// Candidates that did not parse, exactly as the source received them
    ///
    /// The string is recorded before any [`VersionFix`] is applied, so a tag
    /// `vnext` with [`VersionFix::delete_leading_v`] is reported as `vnext`.
    pub malformed: Vec<String>,
    pub meta: Option<Meta>,
}

impl FetchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes every candidate with `fix`, sorting each into `versions` or `malformed`
    pub fn from_candidates<I, S>(candidates: I, fix: &VersionFix) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = Self::new();
        for candidate in candidates {
            result.push_candidate(candidate.as_ref(), fix);
        }
        result
    }

    /// Normalizes one candidate; a malformed one is recorded, never dropped
    pub fn push_candidate(&mut self, raw: &str, fix: &VersionFix) {
        match normalize(raw, fix) {
            Ok(version) => self.versions.push(version),
            Err(e) => self.malformed.push(e.raw),
        }
    }

    pub fn with_meta(mut self, meta: Option<Meta>) -> Self {
        self.meta = meta;
        self
    }

    /// Returns the greatest version by precedence, if any
    pub fn latest(&self) -> Option<&Version> {
        self.versions.iter().max_by(|a, b| compare_precedence(a, b))
    }
}

/// Outcome of checking a target against a source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Greatest version found on the source
    pub current: String,
    /// Target is less than `current`
    pub outdated: bool,
    /// Target is equal to or greater than `current`
    pub latest: bool,
    /// Target is greater than `current`
    pub new: bool,
    /// Candidates that could not be parsed and were not compared
    pub malformed: Vec<String>,
    pub meta: Option<Meta>,
}

impl CheckResult {
    /// Whether the target satisfies the caller: `new` when required, `latest` otherwise
    pub fn is_up_to_date(&self, require_new: bool) -> bool {
        if require_new { self.new } else { self.latest }
    }
}
