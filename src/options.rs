use serde::{Deserialize, Serialize};

/// The GitHub REST API endpoint used when none is configured.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoTreeOptions {
    /// Repository URL, e.g. `https://github.com/rust-lang/cargo`.
    pub url: String,
    /// Branch to list; the repository's default branch when `None`.
    pub branch: Option<String>,
    /// Bearer token sent with every API request, for private repositories
    /// and higher rate limits.
    pub token: Option<String>,
    /// Base URL of the GitHub REST API.
    pub api_base: String,
}
impl Default for RepoTreeOptions {
    fn default() -> Self {
        Self {
            url: String::new(),
            branch: None,
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}
#[derive(Debug, Default)]
pub struct RepoTreeBuilder {
    options: RepoTreeOptions,
}
impl RepoTreeBuilder {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            options: RepoTreeOptions {
                url: url.into(),
                ..Default::default()
            },
        }
    }
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.options.branch = Some(branch.into());
        self
    }
    pub fn default_branch(mut self) -> Self {
        self.options.branch = None;
        self
    }
    pub fn token(mut self, token: Option<String>) -> Self {
        self.options.token = token;
        self
    }
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.options.api_base = base.into();
        self
    }
    pub fn build(self) -> RepoTreeOptions {
        self.options
    }
}
