//! Internal module for building a nested hierarchy from a flat path list and
//! rendering it as a connector-drawn tree.
//!
//! Both halves are pure: construction is a single pass over the input paths,
//! rendering walks the finished tree without mutating it. Neither half ever
//! fails; degenerate input degrades to empty output.

use crate::types::TreeItem;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A named slot inside a [`HierarchyNode`]: either a terminal file or a
/// directory with children of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File,
    Directory(HierarchyNode),
}

/// One level of the repository hierarchy, mapping a segment name to its entry.
///
/// The root node has no name of its own; it only serves as the entry point
/// for rendering. Map order is irrelevant because sibling groups are re-sorted
/// at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyNode {
    children: BTreeMap<String, Entry>,
}

impl HierarchyNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Looks up a direct child by segment name.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.children.get(name)
    }
}

/// Builds the nested hierarchy from a flat listing of repository entries.
///
/// Each path is split on `/`; empty segments (from leading, trailing, or
/// doubled slashes) are filtered out before insertion, and a path with no
/// remaining segments is skipped. A segment that one path treats as a file
/// and another as a directory resolves directory-wins: children already
/// recorded under it are never lost.
pub fn build_hierarchy(items: &[TreeItem]) -> HierarchyNode {
    let mut root = HierarchyNode::new();
    for item in items {
        let segments: Vec<&str> = item.path.split('/').filter(|s| !s.is_empty()).collect();
        insert(&mut root, &segments);
    }
    root
}

fn insert(node: &mut HierarchyNode, segments: &[&str]) {
    match segments {
        [] => {}
        [leaf] => {
            // Never downgrade an existing directory to a file marker.
            node.children.entry((*leaf).to_string()).or_insert(Entry::File);
        }
        [dir, rest @ ..] => {
            let entry = node
                .children
                .entry((*dir).to_string())
                .and_modify(|e| {
                    if matches!(e, Entry::File) {
                        *e = Entry::Directory(HierarchyNode::new());
                    }
                })
                .or_insert_with(|| Entry::Directory(HierarchyNode::new()));
            if let Entry::Directory(child) = entry {
                insert(child, rest);
            }
        }
    }
}

/// Collation for sibling names: case-insensitive, with a case-sensitive
/// tiebreak so equal-ignoring-case names still order deterministically.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Renders the children of `node` as connector-drawn lines, one per entry.
///
/// Sibling groups sort directories first, then names under [`collate`]. The
/// last sibling gets the `└─ ` connector, the rest `├─ `; a directory's
/// subtree follows its own line immediately, indented by `"   "` under a
/// last sibling and `"│  "` otherwise. The root call passes an empty prefix
/// and produces no line for the root itself. An empty node renders as `""`.
pub fn render_tree(node: &HierarchyNode, prefix: &str) -> String {
    let mut entries: Vec<(&String, &Entry)> = node.children.iter().collect();
    entries.sort_by(|(a_name, a_entry), (b_name, b_entry)| {
        let a_is_dir = matches!(a_entry, Entry::Directory(_));
        let b_is_dir = matches!(b_entry, Entry::Directory(_));
        b_is_dir
            .cmp(&a_is_dir)
            .then_with(|| collate(a_name, b_name))
    });

    let mut out = String::new();
    for (index, (name, entry)) in entries.iter().enumerate() {
        let is_last = index == entries.len() - 1;
        let connector = if is_last { "└─ " } else { "├─ " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(name);
        out.push('\n');
        if let Entry::Directory(child) = entry {
            let extension = if is_last { "   " } else { "│  " };
            let child_prefix = format!("{prefix}{extension}");
            out.push_str(&render_tree(child, &child_prefix));
        }
    }
    out
}
