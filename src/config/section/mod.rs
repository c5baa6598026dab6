//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitedef.toml`:
//!
//! | Module  | TOML Section | Purpose                                  |
//! |---------|--------------|------------------------------------------|
//! | `site`  | `[site]`     | Site metadata, base path, head tags      |
//! | `theme` | `[theme]`    | Nav, sidebar, footer, edit link          |

pub mod head;
mod site;
pub mod theme;

// Re-export section configs
pub use head::HeadTag;
pub use site::SiteSectionConfig;
pub use theme::{
    EditLinkConfig, FooterConfig, NavItem, Sidebar, SidebarGroup, SocialLink, ThemeSectionConfig,
};
