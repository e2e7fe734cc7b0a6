use crate::error::RepoTreeError;
use crate::github::{self, GithubClient};
use crate::options::RepoTreeOptions;
use crate::tree::{build_hierarchy, render_tree};
use crate::types::{TreeItem, TreeSnapshot};
#[cfg(feature = "logging")]
use tracing;

/// Fetches a repository's file listing and renders its hierarchy.
///
/// Resolves owner and name from the URL, the branch (explicit or the
/// repository default), the branch's tree id, and the recursive listing,
/// then hands the flat path list to the tree builder. An empty listing is
/// reported as [`RepoTreeError::EmptyRepository`] rather than rendered as a
/// blank document.
///
/// # Errors
///
/// Returns an error for an invalid URL, any failed or rate-limited API
/// request, a truncated listing, or an empty repository.
pub fn repotree(options: RepoTreeOptions) -> Result<TreeSnapshot, RepoTreeError> {
    let (owner, repo) = github::extract_owner_repo(&options.url)?;
    #[cfg(feature = "logging")]
    tracing::debug!("Generating tree for {}/{}", owner, repo);
    let client = GithubClient::new(&options)?;
    let branch = match &options.branch {
        Some(branch) => branch.clone(),
        None => client.default_branch(&owner, &repo)?,
    };
    let sha = client.commit_tree_sha(&owner, &repo, &branch)?;
    let items = client.list_tree(&owner, &repo, &sha)?;
    if items.is_empty() {
        return Err(RepoTreeError::EmptyRepository);
    }
    Ok(snapshot_from_entries(&owner, &repo, &branch, &items))
}

/// Builds and renders a snapshot from an already-fetched listing.
///
/// This is the pure half of [`repotree`]: no I/O, deterministic output for a
/// given input, and invariant under permutations of `items` because sibling
/// order is decided at render time.
pub fn snapshot_from_entries(
    owner: &str,
    repo: &str,
    branch: &str,
    items: &[TreeItem],
) -> TreeSnapshot {
    let root = build_hierarchy(items);
    let tree = render_tree(&root, "");
    TreeSnapshot {
        owner: owner.to_string(),
        repo: repo.to_string(),
        branch: branch.to_string(),
        tree,
        entry_count: items.len(),
    }
}
