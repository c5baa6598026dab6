//! `[theme]` section configuration.
//!
//! Everything the generator's default theme renders around page content:
//! logo, top navigation, sidebar, social links, footer and edit link.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! logo = "/logo.png"
//!
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.sidebar."/guide/"]]
//! text = "Getting Started"
//! items = [ { text = "Introduction", link = "/guide/introduction" } ]
//!
//! [theme.footer]
//! message = "Released under the MIT License."
//! copyright = "Copyright © 2024 Example"
//!
//! [theme.edit_link]
//! pattern = "https://github.com/user/docs/edit/main/:path"
//! text = "Edit this page on GitHub"
//! ```

mod edit_link;
mod nav;
mod sidebar;

pub use edit_link::{EditLinkConfig, PATH_PLACEHOLDER};
pub use nav::NavItem;
pub use sidebar::{Sidebar, SidebarGroup};

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::{LinkKind, classify_link};

/// Theme section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Logo path shown in the navigation bar (site-relative).
    #[config(inline_doc)]
    pub logo: Option<String>,

    /// Top navigation entries, in display order.
    #[config(skip)]
    pub nav: Vec<NavItem>,

    /// Sidebar groups keyed by URL prefix.
    #[config(skip)]
    pub sidebar: Sidebar,

    /// Social link entries (possibly empty).
    #[config(skip)]
    pub social_links: Vec<SocialLink>,

    /// Footer text.
    #[config(sub)]
    pub footer: FooterConfig,

    /// Per-page "view source" link template.
    #[config(sub)]
    pub edit_link: EditLinkConfig,
}

impl ThemeSectionConfig {
    /// Validate the `[theme]` section and everything nested under it.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo
            && classify_link(logo) != LinkKind::SiteRelative
        {
            diag.error_with_hint(
                Self::FIELDS.logo,
                format!("'{}' must be a site-relative path", logo),
                "use a path like \"/logo.png\"",
            );
        }

        nav::validate_nav(&self.nav, diag);
        sidebar::validate_sidebar(&self.sidebar, diag);

        let social = crate::config::FieldPath::new("theme.social_links");
        for (i, entry) in self.social_links.iter().enumerate() {
            entry.validate(&social.index(i), diag);
        }

        self.edit_link.validate(diag);
    }
}

// ============================================================================
// Social links
// ============================================================================

/// A social link shown in the navigation bar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Icon name understood by the generator (e.g. "github").
    pub icon: String,

    /// Absolute URL of the profile or repository.
    pub link: String,
}

impl SocialLink {
    /// Validate one entry at `path` (e.g. `theme.social_links[0]`).
    pub fn validate(&self, path: &crate::config::FieldPath, diag: &mut ConfigDiagnostics) {
        if self.icon.is_empty() {
            diag.error(path.child("icon"), "icon must not be empty");
        }

        if classify_link(&self.link) != LinkKind::Absolute {
            diag.error_with_hint(
                path.child("link"),
                format!("'{}' must be an absolute http(s) URL", self.link),
                "use a URL like \"https://github.com/user\"",
            );
        }
    }
}

// ============================================================================
// Footer
// ============================================================================

/// `[theme.footer]` text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.footer")]
pub struct FooterConfig {
    /// Footer message line.
    #[config(inline_doc)]
    pub message: String,

    /// Copyright line.
    #[config(inline_doc)]
    pub copyright: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.theme.logo.is_none());
        assert!(config.theme.nav.is_empty());
        assert!(config.theme.sidebar.is_empty());
        assert!(config.theme.social_links.is_empty());
        assert!(config.theme.footer.message.is_empty());
        assert!(config.theme.edit_link.pattern.is_none());
    }

    #[test]
    fn test_logo_must_be_site_relative() {
        let config = ThemeSectionConfig {
            logo: Some("logo.png".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.logo");
    }

    #[test]
    fn test_social_link_must_be_absolute() {
        let entry = SocialLink {
            icon: "github".into(),
            link: "/github".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        entry.validate(&crate::config::FieldPath::new("theme.social_links").index(0), &mut diag);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "theme.social_links[0].link"
        );
    }

    #[test]
    fn test_footer_parses() {
        let config = test_parse_config(
            "[theme.footer]\nmessage = \"Released under the MIT License.\"\ncopyright = \"Copyright © 2024 Example\"",
        );
        assert_eq!(config.theme.footer.message, "Released under the MIT License.");
        assert_eq!(config.theme.footer.copyright, "Copyright © 2024 Example");
    }
}
