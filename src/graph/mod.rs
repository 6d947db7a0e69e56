//! Read-only node graph - the data-access context for queries
//!
//! The graph owns every ingested content node plus the site metadata and
//! exposes the typed query surface the page builders consume. It is built
//! once per build, after ingestion settles, and never mutated.

use serde::Serialize;
use thiserror::Error;

use crate::config::SiteMetadata;
use crate::content::{ContentNode, NodeId, NodeKind};
use crate::helpers::{long_date, prune, short_date, strip_html};

/// Maximum excerpt length on the listing page, in characters
pub const EXCERPT_LENGTH: usize = 250;

/// Error from the typed query surface
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("no markdown node with id \"{0}\"")]
    NodeNotFound(NodeId),

    #[error("markdown node \"{0}\" has no slug field")]
    MissingSlug(NodeId),
}

/// One row of the routing query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingRow {
    pub id: NodeId,
    pub slug: String,
}

/// A single post fetched for the post page
#[derive(Debug, Clone, Serialize)]
pub struct PostDocument {
    pub title: String,
    /// Pre-formatted as "YYYY Month-name Ordinal-day"
    pub date: String,
    /// Rendered HTML body
    pub body: String,
}

/// One entry of the listing query
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    pub id: NodeId,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub slug: String,
}

/// Read-only store of content nodes and site metadata
pub struct NodeGraph {
    nodes: Vec<ContentNode>,
    metadata: SiteMetadata,
}

impl NodeGraph {
    /// Build the graph from ingested nodes and the site configuration
    pub fn new(nodes: Vec<ContentNode>, metadata: SiteMetadata) -> Self {
        Self { nodes, metadata }
    }

    /// All nodes in the graph
    pub fn nodes(&self) -> &[ContentNode] {
        &self.nodes
    }

    /// The cached global `{title, description}` record
    pub fn site_metadata(&self) -> &SiteMetadata {
        &self.metadata
    }

    fn markdown_nodes(&self) -> impl Iterator<Item = &ContentNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Markdown)
    }

    /// Routing query: every markdown node with its slug, published or not.
    ///
    /// A markdown node without a slug violates the ingestion invariant and
    /// fails the whole query.
    pub fn posts_for_routing(&self) -> Result<Vec<RoutingRow>, QueryError> {
        self.markdown_nodes()
            .map(|n| match &n.slug {
                Some(slug) => Ok(RoutingRow {
                    id: n.id.clone(),
                    slug: slug.clone(),
                }),
                None => Err(QueryError::MissingSlug(n.id.clone())),
            })
            .collect()
    }

    /// Post page query: body and frontmatter for one markdown node.
    ///
    /// The date is formatted at query time.
    pub fn post_by_id(&self, id: &NodeId) -> Result<PostDocument, QueryError> {
        let node = self
            .markdown_nodes()
            .find(|n| &n.id == id)
            .ok_or_else(|| QueryError::NodeNotFound(id.clone()))?;

        Ok(PostDocument {
            title: node.title.clone(),
            date: long_date(&node.date),
            body: node.content.clone(),
        })
    }

    /// Listing query: published markdown nodes, newest first, each with a
    /// pruned plain-text excerpt.
    pub fn published_posts(&self) -> Result<Vec<PostSummary>, QueryError> {
        let mut posts: Vec<&ContentNode> = self.markdown_nodes().filter(|n| n.published).collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        posts
            .into_iter()
            .map(|n| {
                let slug = n
                    .slug
                    .clone()
                    .ok_or_else(|| QueryError::MissingSlug(n.id.clone()))?;

                Ok(PostSummary {
                    id: n.id.clone(),
                    title: n.title.clone(),
                    date: short_date(&n.date),
                    excerpt: prune(&strip_html(&n.content), EXCERPT_LENGTH),
                    slug,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use std::path::PathBuf;

    fn meta() -> SiteMetadata {
        SiteMetadata {
            title: "Site".to_string(),
            description: "Desc".to_string(),
        }
    }

    fn post(source: &str, date: &str, published: bool, body: &str) -> ContentNode {
        let date = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        let mut node = ContentNode {
            id: NodeId::new(source),
            kind: NodeKind::Markdown,
            title: source.trim_end_matches(".md").to_string(),
            date: Local
                .from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
                .unwrap(),
            published,
            raw: body.to_string(),
            content: format!("<p>{}</p>", body),
            source: source.to_string(),
            full_source: PathBuf::from(source),
            slug: None,
        };
        crate::content::attach_slug(&mut node);
        node
    }

    fn other(source: &str) -> ContentNode {
        ContentNode {
            id: NodeId::new(source),
            kind: NodeKind::Other,
            title: source.to_string(),
            date: Local::now(),
            published: false,
            raw: String::new(),
            content: String::new(),
            source: source.to_string(),
            full_source: PathBuf::from(source),
            slug: None,
        }
    }

    #[test]
    fn test_routing_query_covers_all_markdown_nodes() {
        let graph = NodeGraph::new(
            vec![
                post("a.md", "2021-01-01", true, "A"),
                post("b.md", "2021-06-01", false, "B"),
                other("c.png"),
            ],
            meta(),
        );

        let rows = graph.posts_for_routing().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().any(|r| r.slug == "/posts/a/"));
        assert!(rows.iter().any(|r| r.slug == "/posts/b/"));
    }

    #[test]
    fn test_routing_query_missing_slug_is_error() {
        let mut broken = post("a.md", "2021-01-01", true, "A");
        broken.slug = None;
        let graph = NodeGraph::new(vec![broken], meta());

        assert!(matches!(
            graph.posts_for_routing(),
            Err(QueryError::MissingSlug(_))
        ));
    }

    #[test]
    fn test_post_by_id_formats_date() {
        let graph = NodeGraph::new(vec![post("hello.md", "2021-06-01", true, "Hi")], meta());
        let doc = graph.post_by_id(&NodeId::new("hello.md")).unwrap();
        assert_eq!(doc.title, "hello");
        assert_eq!(doc.date, "2021 June 1st");
        assert_eq!(doc.body, "<p>Hi</p>");
    }

    #[test]
    fn test_post_by_id_unknown_node() {
        let graph = NodeGraph::new(vec![], meta());
        assert!(matches!(
            graph.post_by_id(&NodeId::new("ghost.md")),
            Err(QueryError::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_published_posts_filters_and_sorts_descending() {
        let graph = NodeGraph::new(
            vec![
                post("jan.md", "2021-01-01", true, "Jan"),
                post("jun.md", "2021-06-01", true, "Jun"),
                post("old.md", "2020-01-01", true, "Old"),
                post("draft.md", "2021-12-31", false, "Draft"),
            ],
            meta(),
        );

        let posts = graph.published_posts().unwrap();
        let dates: Vec<&str> = posts.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2021-06-01", "2021-01-01", "2020-01-01"]);
        assert!(posts.iter().all(|p| p.title != "draft"));
    }

    #[test]
    fn test_published_posts_prunes_excerpt() {
        let long_body = "word ".repeat(100);
        let graph = NodeGraph::new(
            vec![post("long.md", "2021-01-01", true, &long_body)],
            meta(),
        );

        let posts = graph.published_posts().unwrap();
        assert!(posts[0].excerpt.chars().count() <= EXCERPT_LENGTH);
        assert!(posts[0].excerpt.ends_with('…'));
    }

    #[test]
    fn test_site_metadata_is_stable() {
        let graph = NodeGraph::new(vec![], meta());
        let first = graph.site_metadata().clone();
        let second = graph.site_metadata().clone();
        assert_eq!(first, second);
    }
}
