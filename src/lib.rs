//! Check whether a version is the latest one published by a remote source.
//!
//! ```no_run
//! use latest::version::checker::check;
//! use latest::version::sources::GitHubTagSource;
//! use latest::version::semver::VersionFix;
//!
//! # async fn run() -> Result<(), latest::version::error::CheckError> {
//! let source = GitHubTagSource::new("tcnksm", "ghr").with_fix(VersionFix::delete_leading_v());
//! let result = check("0.5.0", &source).await?;
//! if result.outdated {
//!     eprintln!("0.5.0 is not latest, {} is available", result.current);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod log;
pub mod version;
