//! Route materialization - turns the node graph into a table of page registrations

use anyhow::{Context, Result};

use crate::content::NodeId;
use crate::graph::NodeGraph;

/// Route of the listing page
pub const INDEX_PATH: &str = "/";
/// Route of the about page
pub const ABOUT_PATH: &str = "/about";

/// Template a page registration is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Single post document
    Post,
    /// Site-wide listing page
    Listing,
    /// Static about page
    About,
}

/// Data context handed to the template when the page renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Identifier of the content node backing the page, if any
    pub id: Option<NodeId>,
}

/// A build-time declaration binding a route to a template and a data context
#[derive(Debug, Clone)]
pub struct PageRegistration {
    pub path: String,
    pub template: Template,
    pub context: PageContext,
}

/// The full set of pages to render for one build
#[derive(Debug, Default)]
pub struct RouteTable {
    pages: Vec<PageRegistration>,
}

impl RouteTable {
    pub fn pages(&self) -> &[PageRegistration] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Query all markdown nodes and register exactly one page per node, plus
/// the listing and about routes.
///
/// A failing routing query halts the build with no pages registered.
pub fn materialize(graph: &NodeGraph) -> Result<RouteTable> {
    let rows = graph
        .posts_for_routing()
        .context("routing query failed, no pages registered")?;

    let mut pages = Vec::with_capacity(rows.len() + 2);

    for row in rows {
        pages.push(PageRegistration {
            path: row.slug,
            template: Template::Post,
            context: PageContext { id: Some(row.id) },
        });
    }

    pages.push(PageRegistration {
        path: INDEX_PATH.to_string(),
        template: Template::Listing,
        context: PageContext { id: None },
    });

    pages.push(PageRegistration {
        path: ABOUT_PATH.to_string(),
        template: Template::About,
        context: PageContext { id: None },
    });

    Ok(RouteTable { pages })
}
