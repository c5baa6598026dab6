//! Top navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.nav]]
//! text = "Guide"
//! link = "/guide/introduction"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::util::{LinkKind, classify_link};
use crate::config::{ConfigDiagnostics, FieldPath};

/// A `{ text, link }` pair, used by both top navigation and sidebar items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItem {
    /// Display label.
    pub text: String,

    /// Target, site-relative (`/guide/intro`) or absolute http(s) URL.
    pub link: String,
}

impl NavItem {
    /// Validate a single entry at `path` (e.g. `theme.nav[0]`).
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.is_empty() {
            diag.error(path.child("text"), "text must not be empty");
        }

        if let LinkKind::Invalid(reason) = classify_link(&self.link) {
            diag.error_with_hint(
                path.child("link"),
                reason,
                "use a site-relative path like \"/guide/introduction\"",
            );
        }
    }

    /// True if the link is site-relative (starts with `/`).
    pub fn is_internal(&self) -> bool {
        classify_link(&self.link) == LinkKind::SiteRelative
    }
}

/// Validate the ordered `theme.nav` sequence.
pub fn validate_nav(nav: &[NavItem], diag: &mut ConfigDiagnostics) {
    let base = FieldPath::new("theme.nav");
    for (i, item) in nav.iter().enumerate() {
        item.validate(&base.index(i), diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_nav_entries_preserved_in_order() {
        // Validation returns the entries unchanged, in declaration order.
        let config = test_parse_config(
            r#"
[[theme.nav]]
text = "Home"
link = "/"

[[theme.nav]]
text = "Guide"
link = "/guide/introduction"
"#,
        );

        let mut diag = ConfigDiagnostics::new();
        validate_nav(&config.theme.nav, &mut diag);
        assert!(diag.is_empty());

        assert_eq!(config.theme.nav.len(), 2);
        assert_eq!(
            config.theme.nav[0],
            NavItem {
                text: "Home".into(),
                link: "/".into()
            }
        );
        assert_eq!(
            config.theme.nav[1],
            NavItem {
                text: "Guide".into(),
                link: "/guide/introduction".into()
            }
        );
    }

    #[test]
    fn test_missing_text_names_offending_entry() {
        let nav = vec![
            NavItem {
                text: "Home".into(),
                link: "/".into(),
            },
            NavItem {
                text: String::new(),
                link: "/guide/introduction".into(),
            },
        ];

        let mut diag = ConfigDiagnostics::new();
        validate_nav(&nav, &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.nav[1].text");
    }

    #[test]
    fn test_relative_link_without_slash_rejected() {
        let nav = vec![NavItem {
            text: "Guide".into(),
            link: "guide/introduction".into(),
        }];

        let mut diag = ConfigDiagnostics::new();
        validate_nav(&nav, &mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.nav[0].link");
    }

    #[test]
    fn test_absolute_link_accepted() {
        let nav = vec![NavItem {
            text: "GitHub".into(),
            link: "https://github.com/user/repo".into(),
        }];

        let mut diag = ConfigDiagnostics::new();
        validate_nav(&nav, &mut diag);
        assert!(diag.is_empty());
        assert!(!nav[0].is_internal());
    }
}
