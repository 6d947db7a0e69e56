//! Configuration module

mod site;

pub use site::{SiteConfig, SiteMetadata};
