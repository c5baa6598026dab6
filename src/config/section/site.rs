//! `[site]` configuration.
//!
//! Site metadata handed verbatim to the documentation generator.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Project Docs"
//! description = "Complete documentation for the project"
//! base = "/"
//! clean_urls = true
//! out_dir = "dist"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::head::HeadTag;
use crate::config::ConfigDiagnostics;

/// Site metadata for the generated documentation site.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site title shown in the browser tab and navigation bar.
    #[config(inline_doc)]
    pub title: String,

    /// Site description used for the meta description tag.
    #[config(inline_doc)]
    pub description: String,

    /// Root URL path the site is served under (e.g. "/" or "/docs/").
    #[config(default = "/", inline_doc)]
    pub base: String,

    /// Drop ".html" extensions from generated URLs.
    #[config(default = "true", inline_doc)]
    pub clean_urls: bool,

    /// Output directory for the generated site, relative to the site root.
    #[config(default = "dist", inline_doc)]
    pub out_dir: String,

    /// Head tag descriptors, injected into every generated page in order.
    #[config(skip)]
    pub head: Vec<HeadTag>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            base: "/".into(),
            clean_urls: true,
            out_dir: "dist".into(),
            head: Vec::new(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate the `[site]` section.
    ///
    /// # Checks
    /// - `title` and `description` must be set
    /// - `base` must start and end with `/`
    /// - `out_dir` must be a non-empty relative path
    /// - every head entry must carry a valid tag name
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error(Self::FIELDS.title, "title is required");
        }

        if self.description.is_empty() {
            diag.error(Self::FIELDS.description, "description is required");
        }

        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("'{}' must start and end with '/'", self.base),
                "use \"/\" for a root deployment or \"/docs/\" for a subpath",
            );
        }

        if self.out_dir.is_empty() {
            diag.error(Self::FIELDS.out_dir, "out_dir must not be empty");
        } else if Path::new(&self.out_dir).is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.out_dir,
                format!("'{}' must be relative to the site root", self.out_dir),
                "use a path like \"dist\"",
            );
        }

        let head_path = crate::config::FieldPath::new("site.head");
        for (i, tag) in self.head.iter().enumerate() {
            tag.validate(&head_path.index(i), diag);
        }
    }
}
