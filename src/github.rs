//! Blocking client for the GitHub REST API.
//!
//! Resolves a repository URL to owner/name, the default branch, the branch's
//! commit tree id, and finally the recursive flat file listing the hierarchy
//! is built from. A listing the API reports as truncated is surfaced as an
//! error rather than rendered partially.

use crate::error::RepoTreeError;
use crate::options::RepoTreeOptions;
use crate::types::TreeItem;
use serde::Deserialize;
#[cfg(feature = "logging")]
use tracing;
use url::Url;

const USER_AGENT: &str = concat!("repotree/", env!("CARGO_PKG_VERSION"));

/// Extracts `(owner, repo)` from a repository URL such as
/// `https://github.com/rust-lang/cargo` or any deeper path under it.
pub fn extract_owner_repo(raw: &str) -> Result<(String, String), RepoTreeError> {
    let clean = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(clean).map_err(|_| RepoTreeError::InvalidUrl(clean.to_string()))?;
    let mut segments = parsed
        .path_segments()
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty());
    match (segments.next(), segments.next()) {
        (Some(owner), Some(repo)) => Ok((owner.to_string(), repo.to_string())),
        _ => Err(RepoTreeError::InvalidUrl(clean.to_string())),
    }
}

#[derive(Deserialize)]
struct RepoResponse {
    #[serde(default)]
    default_branch: Option<String>,
}

#[derive(Deserialize)]
struct CommitResponse {
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    tree: TreeRef,
}

#[derive(Deserialize)]
struct TreeRef {
    sha: String,
}

#[derive(Deserialize)]
struct TreeListing {
    #[serde(default)]
    truncated: bool,
    #[serde(default)]
    tree: Vec<TreeItem>,
}

pub(crate) struct GithubClient {
    http: reqwest::blocking::Client,
    api_base: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(options: &RepoTreeOptions) -> Result<Self, RepoTreeError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            api_base: options.api_base.trim_end_matches('/').to_string(),
            token: options.token.clone(),
        })
    }

    /// Resolves the repository's default branch, falling back to `main` when
    /// the API omits it.
    pub fn default_branch(&self, owner: &str, repo: &str) -> Result<String, RepoTreeError> {
        let url = format!("{}/repos/{}/{}", self.api_base, owner, repo);
        let response = self.get(&url)?;
        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 404 {
                return Err(RepoTreeError::NotFound {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                });
            }
            if status.as_u16() == 403 {
                return Err(RepoTreeError::RateLimited);
            }
            return Err(RepoTreeError::Api {
                status: status.as_u16(),
                context: "failed to access repository",
            });
        }
        let body: RepoResponse = response
            .json()
            .map_err(|e| RepoTreeError::Payload(e.to_string()))?;
        let branch = body
            .default_branch
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| "main".to_string());
        #[cfg(feature = "logging")]
        tracing::debug!("Resolved default branch for {}/{}: {}", owner, repo, branch);
        Ok(branch)
    }

    /// Resolves the tree id of the branch's current commit.
    pub fn commit_tree_sha(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<String, RepoTreeError> {
        let url = format!("{}/repos/{}/{}/commits/{}", self.api_base, owner, repo, branch);
        let response = self.get(&url)?;
        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 403 {
                return Err(RepoTreeError::RateLimited);
            }
            return Err(RepoTreeError::Api {
                status: status.as_u16(),
                context: "cannot access repository commits",
            });
        }
        let body: CommitResponse = response
            .json()
            .map_err(|e| RepoTreeError::Payload(format!("invalid commit data: {e}")))?;
        Ok(body.commit.tree.sha)
    }

    /// Fetches the recursive flat file listing for a tree id.
    pub fn list_tree(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> Result<Vec<TreeItem>, RepoTreeError> {
        let url = format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            self.api_base, owner, repo, sha
        );
        let response = self.get(&url)?;
        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 403 {
                return Err(RepoTreeError::RateLimited);
            }
            return Err(RepoTreeError::Api {
                status: status.as_u16(),
                context: "cannot fetch folder structure",
            });
        }
        let body: TreeListing = response
            .json()
            .map_err(|e| RepoTreeError::Payload(format!("unexpected folder structure format: {e}")))?;
        if body.truncated {
            return Err(RepoTreeError::Truncated);
        }
        #[cfg(feature = "logging")]
        tracing::debug!("Fetched {} entries for {}/{}", body.tree.len(), owner, repo);
        Ok(body.tree)
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, RepoTreeError> {
        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        Ok(request.send()?)
    }
}
