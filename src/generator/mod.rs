//! Generator module - renders the route table to static HTML files

use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;

use tera::Context;

use crate::graph::NodeGraph;
use crate::routes::{PageRegistration, RouteTable, Template};
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Static site generator using the embedded Tera templates
pub struct Generator {
    public_dir: PathBuf,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            public_dir: blog.public_dir.clone(),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Render every registered page into the public directory
    pub fn generate(&self, graph: &NodeGraph, routes: &RouteTable) -> Result<()> {
        fs::create_dir_all(&self.public_dir)?;

        for page in routes.pages() {
            let html = self.render_page(graph, page)?;

            // Strip the leading slash to avoid creating absolute paths
            let clean_path = page.path.trim_start_matches('/');
            let output_path = self.public_dir.join(clean_path).join("index.html");

            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| anyhow!("Failed to create dir {:?}: {}", parent, e))?;
            }
            fs::write(&output_path, &html)
                .map_err(|e| anyhow!("Failed to write {:?}: {}", output_path, e))?;
            tracing::debug!("Generated: {:?}", output_path);
        }

        Ok(())
    }

    /// Render one registered page to HTML
    fn render_page(&self, graph: &NodeGraph, page: &PageRegistration) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", graph.site_metadata());

        match page.template {
            Template::Post => {
                let id = page
                    .context
                    .id
                    .as_ref()
                    .ok_or_else(|| anyhow!("post registration for {} has no node id", page.path))?;
                let post = graph.post_by_id(id)?;
                context.insert("title", &post.title);
                context.insert("date", &post.date);
                context.insert("body", &post.body);
                self.renderer.render("post.html", &context)
            }
            Template::Listing => {
                let posts = graph.published_posts()?;
                context.insert("posts", &posts);
                self.renderer.render("index.html", &context)
            }
            Template::About => self.renderer.render("about.html", &context),
        }
    }
}
