use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum RepoTreeError {
    #[error("invalid repository URL: {0}")]
    InvalidUrl(String),
    #[error("repository not found: {owner}/{repo}")]
    NotFound { owner: String, repo: String },
    #[error("GitHub API rate limit exceeded, try again later")]
    RateLimited,
    #[error("{context} (HTTP {status})")]
    Api { status: u16, context: &'static str },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected API response: {0}")]
    Payload(String),
    #[error("repository listing is truncated, the tree would be incomplete")]
    Truncated,
    #[error("repository appears to be empty")]
    EmptyRepository,
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
impl RepoTreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepoTreeError::Io {
            path: path.into(),
            source,
        }
    }
}
