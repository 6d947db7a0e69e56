//! Content ingestion - creates one content node per source file

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::node::{attach_slug, is_markdown_file};
use super::{ContentNode, FrontMatter, MarkdownRenderer, NodeId, NodeKind};
use crate::Blog;

/// Ingests content nodes from the content directory
pub struct ContentIngestor<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentIngestor<'a> {
    /// Create a new content ingestor
    pub fn new(blog: &'a Blog) -> Self {
        Self {
            blog,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Create one content node per file under the content directory.
    ///
    /// Markdown nodes are created whether or not they are published;
    /// drafts get routes but stay off the listing page.
    pub fn ingest(&self) -> Result<Vec<ContentNode>> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.exists() {
            return Ok(Vec::new());
        }

        let mut nodes = Vec::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            match self.load_node(path) {
                Ok(node) => nodes.push(node),
                Err(e) => {
                    tracing::warn!("Failed to load content node {:?}: {}", path, e);
                }
            }
        }

        Ok(nodes)
    }

    /// Load a single content node from a file
    fn load_node(&self, path: &Path) -> Result<ContentNode> {
        let source = path
            .strip_prefix(&self.blog.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let metadata = fs::metadata(path)?;
        let file_modified = metadata
            .modified()
            .ok()
            .map(|t| chrono::DateTime::<Local>::from(t));

        let mut node = if is_markdown_file(path) {
            let text = fs::read_to_string(path)?;
            let (fm, body) = FrontMatter::parse(&text)?;

            let date = fm
                .parse_date()
                .unwrap_or_else(|| file_modified.unwrap_or_else(Local::now));

            let title = fm.title.unwrap_or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("Untitled")
                    .to_string()
            });

            let content = self.renderer.render(body)?;

            ContentNode {
                id: NodeId::new(source.clone()),
                kind: NodeKind::Markdown,
                title,
                date,
                published: fm.published,
                raw: body.to_string(),
                content,
                source,
                full_source: path.to_path_buf(),
                slug: None,
            }
        } else {
            // Non-markdown files become plain nodes with no body
            let title = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string();

            ContentNode {
                id: NodeId::new(source.clone()),
                kind: NodeKind::Other,
                title,
                date: file_modified.unwrap_or_else(Local::now),
                published: false,
                raw: String::new(),
                content: String::new(),
                source,
                full_source: path.to_path_buf(),
                slug: None,
            }
        };

        attach_slug(&mut node);

        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, rel: &str, contents: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn blog_in(dir: &Path) -> Blog {
        Blog::new(dir).unwrap()
    }

    #[test]
    fn test_ingest_creates_one_node_per_file() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write(
            &content,
            "first.mdx",
            "---\ntitle: First\ndate: 2021-06-01\npublished: true\n---\nHello.",
        );
        write(&content, "second.md", "---\ntitle: Second\n---\nDraft.");
        write(&content, "photo.png", "not really a png");

        let blog = blog_in(tmp.path());
        let nodes = ContentIngestor::new(&blog).ingest().unwrap();

        assert_eq!(nodes.len(), 3);
        let markdown = nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Markdown)
            .count();
        assert_eq!(markdown, 2);
    }

    #[test]
    fn test_ingest_attaches_slug_to_markdown_only() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write(
            &content,
            "hello-world.mdx",
            "---\ntitle: Hello\npublished: true\n---\nBody.",
        );
        write(&content, "notes.txt", "scratch");

        let blog = blog_in(tmp.path());
        let nodes = ContentIngestor::new(&blog).ingest().unwrap();

        let post = nodes.iter().find(|n| n.source == "hello-world.mdx").unwrap();
        assert_eq!(post.slug.as_deref(), Some("/posts/hello-world/"));

        let other = nodes.iter().find(|n| n.source == "notes.txt").unwrap();
        assert_eq!(other.slug, None);
    }

    #[test]
    fn test_ingest_keeps_unpublished_nodes() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write(&content, "draft.md", "---\ntitle: Draft\n---\nShh.");

        let blog = blog_in(tmp.path());
        let nodes = ContentIngestor::new(&blog).ingest().unwrap();

        assert_eq!(nodes.len(), 1);
        assert!(!nodes[0].published);
        assert!(nodes[0].slug.is_some());
    }

    #[test]
    fn test_ingest_renders_body_html() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write(
            &content,
            "post.md",
            "---\ntitle: P\npublished: true\n---\n# Heading\n\nText.",
        );

        let blog = blog_in(tmp.path());
        let nodes = ContentIngestor::new(&blog).ingest().unwrap();

        assert!(nodes[0].content.contains("<h1>Heading</h1>"));
        assert!(nodes[0].raw.contains("# Heading"));
    }

    #[test]
    fn test_ingest_missing_content_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = blog_in(tmp.path());
        let nodes = ContentIngestor::new(&blog).ingest().unwrap();
        assert!(nodes.is_empty());
    }
}
