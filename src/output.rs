//! Output formatting for tree snapshots.
//!
//! Provides functions to format a [`TreeSnapshot`] into Markdown, plain text,
//! or JSON, and to write the result to a file. The markdown form is the
//! canonical one: a `# repo` header, a blank line, then the connector tree,
//! verbatim-writable as a `.md` document.

use crate::{RepoTreeError, TreeSnapshot};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Text,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the snapshot into a string.
pub fn format_snapshot(snapshot: &TreeSnapshot, format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Markdown => format_markdown(snapshot),
        OutputFormat::Text => format_text(snapshot),
        OutputFormat::Json => format_json(snapshot, pretty),
    }
}

/// Writes the formatted snapshot to a file.
pub fn write_snapshot_to_file(
    snapshot: &TreeSnapshot,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), RepoTreeError> {
    let content = format_snapshot(snapshot, format, pretty);
    fs::write(&path, content).map_err(|e| RepoTreeError::io(path.as_ref(), e))?;
    Ok(())
}

/// Default download-style file name for a repository's markdown tree.
pub fn default_file_name(repo: &str) -> String {
    format!("{repo}-structure.md")
}

// ----------------------- Internal formatting -----------------------

fn format_markdown(snapshot: &TreeSnapshot) -> String {
    let mut out = String::with_capacity(snapshot.tree.len() + 64);
    out.push_str("# ");
    out.push_str(&snapshot.repo);
    out.push_str("\n\n");
    out.push_str(&snapshot.tree);
    if !snapshot.tree.is_empty() && !snapshot.tree.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn format_text(snapshot: &TreeSnapshot) -> String {
    let mut out = String::with_capacity(snapshot.tree.len() + 64);
    out.push_str(&format!(
        "Repository: {}/{} ({})\n\n",
        snapshot.owner, snapshot.repo, snapshot.branch
    ));
    out.push_str(&snapshot.tree);
    if !snapshot.tree.is_empty() && !snapshot.tree.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn format_json(snapshot: &TreeSnapshot, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(snapshot).expect("JSON serialization failed")
    } else {
        serde_json::to_string(snapshot).expect("JSON serialization failed")
    }
}
