//! Version comparison against a source

use std::cmp::Ordering;

use semver::Version;

use crate::version::error::CheckError;
use crate::version::semver::{VersionFix, compare_precedence, normalize};
use crate::version::source::Source;
use crate::version::types::{CheckResult, FetchResult};

/// Compares a target version with the greatest version a source publishes
#[derive(Debug, Clone, Default)]
pub struct Checker {
    disabled: bool,
    target_fix: VersionFix,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    /// When disabled, `check` returns an empty result without any network access
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Fix-up applied to the target before it is parsed
    pub fn with_target_fix(mut self, fix: VersionFix) -> Self {
        self.target_fix = fix;
        self
    }

    /// Validates and fetches `source`, then classifies `target` against the
    /// greatest fetched version.
    ///
    /// The target is parsed first so an invalid target never causes a request.
    pub async fn check<S>(&self, target: &str, source: &S) -> Result<CheckResult, CheckError>
    where
        S: Source + ?Sized,
    {
        if self.disabled {
            return Ok(CheckResult::default());
        }

        let target = normalize(target, &self.target_fix).map_err(CheckError::InvalidTarget)?;

        source.validate()?;
        let fetched = source.fetch().await?;

        classify(&target, fetched)
    }
}

/// Checks `target` against `source` with the default [`Checker`]
pub async fn check<S>(target: &str, source: &S) -> Result<CheckResult, CheckError>
where
    S: Source + ?Sized,
{
    Checker::default().check(target, source).await
}

/// Classifies `target` against the greatest version in `fetched`
pub fn classify(target: &Version, fetched: FetchResult) -> Result<CheckResult, CheckError> {
    let current = fetched.latest().ok_or(CheckError::NoVersionToCompare)?;
    let ordering = compare_precedence(target, current);
    let current = current.to_string();

    Ok(CheckResult {
        current,
        outdated: ordering == Ordering::Less,
        latest: ordering != Ordering::Less,
        new: ordering == Ordering::Greater,
        malformed: fetched.malformed,
        meta: fetched.meta,
    })
}
