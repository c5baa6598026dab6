//! Sidebar structure keyed by URL prefix.
//!
//! # Example
//!
//! ```toml
//! [[theme.sidebar."/guide/"]]
//! text = "Getting Started"
//! items = [
//!     { text = "Introduction", link = "/guide/introduction" },
//!     { text = "Installation", link = "/guide/installation" },
//! ]
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::nav::NavItem;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Mapping from URL prefix to the sidebar groups shown under it.
///
/// `BTreeMap` keeps key order deterministic across loads, which the
/// export format relies on.
pub type Sidebar = BTreeMap<String, Vec<SidebarGroup>>;

/// A named group of navigation links shown under a URL prefix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,

    /// Links in display order.
    pub items: Vec<NavItem>,
}

impl SidebarGroup {
    /// Validate one group at `path` (e.g. `theme.sidebar["/guide/"][0]`).
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.is_empty() {
            diag.error(path.child("text"), "text must not be empty");
        }

        if self.items.is_empty() {
            diag.error_with_hint(
                path.child("items"),
                "group has no items",
                "add at least one { text, link } entry or remove the group",
            );
        }

        let items = path.child("items");
        for (i, item) in self.items.iter().enumerate() {
            item.validate(&items.index(i), diag);
        }
    }
}

/// Validate the whole sidebar mapping.
///
/// Beyond per-entry checks, every key must be a URL prefix (`/`-delimited)
/// and must prefix at least one of the links listed under it. A key no link
/// matches would never be shown by the generator, which almost always means
/// a typo in the key or in the links.
pub fn validate_sidebar(sidebar: &Sidebar, diag: &mut ConfigDiagnostics) {
    let base = FieldPath::new("theme.sidebar");

    for (key, groups) in sidebar {
        let key_path = base.key(key);

        if !key.starts_with('/') || !key.ends_with('/') {
            diag.error_with_hint(
                key_path.clone(),
                format!("'{}' must start and end with '/'", key),
                "sidebar keys are URL prefixes like \"/guide/\"",
            );
        }

        if groups.is_empty() {
            diag.error(key_path.clone(), "no sidebar groups under this prefix");
        }

        // Collect internal links for the prefix consistency check
        let mut links: FxHashSet<&str> = FxHashSet::default();
        for (i, group) in groups.iter().enumerate() {
            group.validate(&key_path.index(i), diag);
            for item in &group.items {
                if item.is_internal() {
                    links.insert(item.link.as_str());
                }
            }
        }

        if !groups.is_empty() && !links.iter().any(|link| link.starts_with(key.as_str())) {
            diag.error_with_hint(
                key_path,
                format!("no item link under this prefix starts with '{}'", key),
                "the key must prefix at least one of its own links",
            );
        }
    }
}
