//! List site content

use anyhow::Result;

use crate::content::{ContentIngestor, NodeKind};
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let ingestor = ContentIngestor::new(blog);
    let nodes = ingestor.ingest()?;

    match content_type {
        "post" | "posts" => {
            let mut posts: Vec<_> = nodes
                .iter()
                .filter(|n| n.kind == NodeKind::Markdown)
                .collect();
            posts.sort_by(|a, b| b.date.cmp(&a.date));

            println!("Posts ({}):", posts.len());
            for post in posts {
                let marker = if post.published { "" } else { " (draft)" };
                println!(
                    "  {} - {}{} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    marker,
                    post.source
                );
            }
        }
        "node" | "nodes" => {
            println!("Nodes ({}):", nodes.len());
            for node in nodes {
                println!(
                    "  {:?} {} -> {}",
                    node.kind,
                    node.source,
                    node.slug.as_deref().unwrap_or("-")
                );
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, node", content_type);
        }
    }

    Ok(())
}
