// src/error.rs
// =============================================================================
// Error types shared by the GitHub client and the pipelines.
//
// main.rs still works with anyhow::Result (it only reports errors), but the
// layers underneath return CookbookError so callers can match on what went
// wrong - most importantly the retry fetcher, which needs to know whether a
// failure is worth retrying.
// =============================================================================

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, CookbookError>;

#[derive(Debug, Error)]
pub enum CookbookError {
    /// GITHUB_TOKEN was not set (fatal, checked before any network call)
    #[error("GITHUB_TOKEN is required")]
    MissingToken,

    /// GitHub answered with a non-2xx status
    #[error("GitHub API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (connect, timeout, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL responded 200 but carried an `errors` array
    #[error("GraphQL failed: {0}")]
    GraphQl(String),

    /// File content could not be decoded (bad base64 / not UTF-8)
    #[error("Could not decode content: {0}")]
    Decode(String),

    #[error("Invalid GitHub URL: {0}")]
    InvalidUrl(String),

    #[error("Path {0} is not a directory")]
    NotADirectory(String),

    #[error("File content not found: {0}")]
    NotAFile(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Page frontmatter could not be serialized
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl CookbookError {
    /// Whether retrying the same request has a chance of succeeding.
    ///
    /// Only gateway-class statuses and connection/timeout failures count.
    /// Everything else (401, 404, malformed responses) fails fast.
    pub fn is_transient(&self) -> bool {
        match self {
            CookbookError::Api { status, .. } => matches!(status, 502 | 503 | 504),
            CookbookError::Http(e) => e.is_timeout() || e.is_connect(),
            CookbookError::GraphQl(message) => message.contains("502"),
            _ => false,
        }
    }
}
