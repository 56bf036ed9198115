//! Source test utilities

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use latest::version::error::CheckError;
use latest::version::semver::VersionFix;
use latest::version::source::Source;
use latest::version::types::{FetchResult, Meta};

/// Source returning fixed candidates without any network access
pub struct StaticSource {
    candidates: Vec<String>,
    meta: Option<Meta>,
    fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new(candidates: Vec<&str>) -> Self {
        Self {
            candidates: candidates.into_iter().map(|c| c.to_string()).collect(),
            meta: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Source for StaticSource {
    fn validate(&self) -> Result<(), CheckError> {
        Ok(())
    }

    async fn fetch(&self) -> Result<FetchResult, CheckError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if self.candidates.is_empty() {
            return Err(CheckError::NotFound("no candidates".to_string()));
        }

        Ok(
            FetchResult::from_candidates(&self.candidates, &VersionFix::default())
                .with_meta(self.meta.clone()),
        )
    }
}
