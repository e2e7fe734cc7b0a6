use serde::{Deserialize, Serialize};

/// The kind of a repository entry as reported by the hosting API.
///
/// The tree builder never consults this; whether a segment is a directory is
/// inferred structurally from the path list. It is kept so that JSON output
/// round-trips what the API returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file.
    Blob,
    /// A directory.
    Tree,
    /// A submodule pointer.
    Commit,
    /// Any kind this crate does not know about.
    #[serde(other)]
    Unknown,
}

/// A single entry of a repository's recursive file listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeItem {
    /// Slash-separated path relative to the repository root, e.g. `src/lib.rs`.
    pub path: String,
    /// Entry kind, when the API provided one.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntryKind>,
}

impl TreeItem {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: None,
        }
    }
}

/// The complete result of a repotree operation.
#[derive(Debug, Serialize, Deserialize)]
pub struct TreeSnapshot {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// The branch the listing was taken from.
    pub branch: String,
    /// The rendered connector tree, one line per entry, without the
    /// `# repo` markdown header.
    pub tree: String,
    /// Number of entries in the flat listing the tree was built from.
    pub entry_count: usize,
}
