//! Content node model and slug derivation

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Stable identifier for a content node, derived from its file-relative path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(String);

impl NodeId {
    pub fn new<S: Into<String>>(source: S) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Internal kind tag for a content node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    /// A markdown or MDX source file
    Markdown,
    /// Any other file in the content directory
    Other,
}

/// One source file plus its metadata
///
/// Nodes are created once during ingestion and are immutable afterwards,
/// except for the slug appended at creation time.
#[derive(Debug, Clone, Serialize)]
pub struct ContentNode {
    /// Node identifier
    pub id: NodeId,

    /// Internal kind tag
    pub kind: NodeKind,

    /// Title from front-matter, or the file stem
    pub title: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Whether the post is published
    pub published: bool,

    /// Raw body (front-matter stripped)
    pub raw: String,

    /// Rendered HTML body
    pub content: String,

    /// Source file path (relative to the content directory)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,

    /// Derived URL slug; only markdown nodes carry one
    pub slug: Option<String>,
}

/// Attach the derived slug field to a newly created node.
///
/// Markdown nodes get `/posts` + their file-derived path; nodes of any
/// other kind are left untouched.
pub fn attach_slug(node: &mut ContentNode) {
    if node.kind != NodeKind::Markdown {
        return;
    }
    node.slug = Some(format!("/posts{}", file_path(Path::new(&node.source))));
}

/// Compute the URL path for a source file relative to the content directory.
///
/// The extension is stripped, `index` files collapse to their directory,
/// and the result carries a leading and trailing slash.
pub fn file_path(relative: &Path) -> String {
    let stem = relative.with_extension("");
    let mut parts: Vec<String> = stem
        .components()
        .filter_map(|c| c.as_os_str().to_str().map(|s| s.to_string()))
        .collect();

    if parts.last().map(|s| s == "index").unwrap_or(false) {
        parts.pop();
    }

    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", parts.join("/"))
    }
}

/// Check if a file is a markdown or MDX file
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown" || e == "mdx")
        .unwrap_or(false)
}
