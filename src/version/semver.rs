use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use semver::Version;

use crate::version::error::MalformedVersion;

/// Fix-up applied to a raw version string before it is parsed.
///
/// Sources use it to turn medium-specific spellings (e.g. tag names like
/// `v1.2.3`) into strict semantic versions. Defaults to the identity.
#[derive(Clone)]
pub struct VersionFix(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl VersionFix {
    /// Wraps an arbitrary fix-up function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Leaves the string untouched
    pub fn nothing() -> Self {
        Self::new(|s| s.to_string())
    }

    /// Removes one leading `v` (`v0.1.1` -> `0.1.1`)
    pub fn delete_leading_v() -> Self {
        Self::new(|s| s.strip_prefix('v').unwrap_or(s).to_string())
    }

    pub fn apply(&self, raw: &str) -> String {
        (self.0)(raw)
    }
}

impl Default for VersionFix {
    fn default() -> Self {
        Self::nothing()
    }
}

impl fmt::Debug for VersionFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VersionFix(..)")
    }
}

/// Parse a raw string into a strict semantic version after applying `fix`.
///
/// Partial versions like "1.2" and extra segments like "1.2.3.4" are rejected.
///
/// Examples:
/// - "1.2.3" -> Version(1, 2, 3)
/// - "v1.2.3" with [`VersionFix::delete_leading_v`] -> Version(1, 2, 3)
/// - "1.2" -> MalformedVersion
pub fn normalize(raw: &str, fix: &VersionFix) -> Result<Version, MalformedVersion> {
    Version::parse(&fix.apply(raw)).map_err(|e| MalformedVersion {
        raw: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Semantic-versioning precedence: build metadata is ignored
pub fn compare_precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}
