use thiserror::Error;

/// A candidate string that is not a valid semantic version
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed version {raw:?}: {reason}")]
pub struct MalformedVersion {
    /// The string as received, before any fix-up
    pub raw: String,
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Invalid source configuration: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Version information not found: {0}")]
    NotFound(String),

    #[error("Invalid target version: {0}")]
    InvalidTarget(#[source] MalformedVersion),

    #[error("No version to compare")]
    NoVersionToCompare,
}
