//! Build the static site

use anyhow::Result;

use crate::content::ContentIngestor;
use crate::generator::Generator;
use crate::graph::NodeGraph;
use crate::routes;
use crate::Blog;

/// Run the full build pipeline: ingest, materialize routes, render.
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    // Ingestion settles before any page is registered
    let ingestor = ContentIngestor::new(blog);
    let nodes = ingestor.ingest()?;
    tracing::info!("Ingested {} content nodes", nodes.len());

    let graph = NodeGraph::new(nodes, blog.config.metadata());

    // A failing routing query halts the build here, before any page
    // registration is visible to the renderer
    let table = routes::materialize(&graph)?;
    tracing::info!("Materialized {} routes", table.len());

    let generator = Generator::new(blog)?;
    generator.generate(&graph, &table)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
