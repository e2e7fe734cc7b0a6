//! # Repotree
//!
//! `repotree` renders a markdown folder-structure tree for a GitHub
//! repository, given its URL. It resolves the repository's default branch
//! (or an explicit one), fetches the recursive flat file listing from the
//! GitHub REST API, builds a nested hierarchy from the path strings, and
//! renders it with `├─`/`└─`/`│` connectors.
//!
//! Directories always sort before files; within a kind, names order
//! case-insensitively. A listing the API reports as truncated is an error,
//! never a silently partial tree.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use repotree::{repotree, RepoTreeBuilder};
//!
//! let options = RepoTreeBuilder::new("https://github.com/rust-lang/cargo")
//!     .branch("master")
//!     .build();
//!
//! let snapshot = repotree(options).expect("failed to fetch repository tree");
//!
//! println!("# {}\n\n{}", snapshot.repo, snapshot.tree);
//! ```

mod engine;
mod error;
mod github;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{repotree, snapshot_from_entries};
pub use error::RepoTreeError;
pub use github::extract_owner_repo;
pub use options::{RepoTreeBuilder, RepoTreeOptions, DEFAULT_API_BASE};
pub use tree::{build_hierarchy, render_tree, Entry, HierarchyNode};
pub use types::{EntryKind, TreeItem, TreeSnapshot};
