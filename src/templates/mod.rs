//! Built-in templates using the Tera template engine
//!
//! The templates are embedded directly in the binary.

use anyhow::Result;
use tera::{Context, Tera};

/// Template renderer with the embedded theme loaded
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Rendered post bodies are already HTML
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("mini/layout.html")),
            ("post.html", include_str!("mini/post.html")),
            ("index.html", include_str!("mini/index.html")),
            ("about.html", include_str!("mini/about.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}
