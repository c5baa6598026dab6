//! Head tag descriptors injected into the generated page `<head>`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ConfigDiagnostics, FieldPath};

/// A single head tag descriptor: tag name plus attribute map.
///
/// Exported to the generator as a `(tagName, attributeMap)` pair.
///
/// # Example
///
/// ```toml
/// [[site.head]]
/// tag = "link"
/// attrs = { rel = "icon", href = "/favicon.webp" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadTag {
    /// HTML tag name (e.g. "link", "meta").
    pub tag: String,

    /// Attribute map. Sorted key order keeps export deterministic.
    pub attrs: BTreeMap<String, String>,
}

impl HeadTag {
    /// Validate a single head entry at `path` (e.g. `site.head[1]`).
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.tag.is_empty() {
            diag.error_with_hint(
                path.child("tag"),
                "tag name must not be empty",
                "use an HTML tag name like \"link\" or \"meta\"",
            );
            return;
        }

        if !self
            .tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            diag.error_with_hint(
                path.child("tag"),
                format!("'{}' is not a valid tag name", self.tag),
                "tag names are lowercase ASCII, e.g. \"meta\"",
            );
        }

        for (name, _) in &self.attrs {
            if name.is_empty() {
                diag.error(path.child("attrs"), "attribute name must not be empty");
            }
        }
    }
}
