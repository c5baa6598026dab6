//! Site configuration management for `sitedef.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site] and head tags
//! │   └── theme/     # [theme] and sub-sections
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                      |
//! |--------------------|----------------------------------------------|
//! | `[site]`           | Title, description, base, out_dir, head tags |
//! | `[theme]`          | Logo, nav, sidebar, social links             |
//! | `[theme.footer]`   | Footer message and copyright                 |
//! | `[theme.edit_link]`| Per-page "view source" URL template          |

pub mod section;
pub mod types;
pub mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    EditLinkConfig, FooterConfig, HeadTag, NavItem, Sidebar, SidebarGroup, SiteSectionConfig,
    SocialLink, ThemeSectionConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitedef.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Unknown fields found while parsing (internal use only)
    #[serde(skip)]
    pub unknown_fields: Vec<String>,

    /// Site metadata (title, description, base, out_dir, head)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Theme settings (nav, sidebar, footer, edit link)
    #[serde(default)]
    pub theme: ThemeSectionConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cli: None,
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            unknown_fields: Vec::new(),
            site: SiteSectionConfig::default(),
            theme: ThemeSectionConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The site root is determined by the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'sitedef init' to create a new site.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir()?;

        match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading: resolve the site root.
    fn finalize(&mut self, cli: &Cli) {
        let root = match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                std::env::current_dir().unwrap_or_default().join(name)
            }
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.set_root(&root);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Unknown fields are kept and reported as warnings during `validate`
    /// (errors in strict mode).
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        config.unknown_fields = ignored;

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    ///
    /// Shorthand for `config.get_root().join(path)`.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get CLI arguments reference
    pub const fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once. Unknown
    /// fields from parsing become warnings (errors in strict mode).
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::with_strict(self.get_cli().is_strict());

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        for field in &self.unknown_fields {
            diag.warn(
                FieldPath::owned(field.clone()),
                "unknown field, not part of the schema",
            );
        }

        // Validate each section
        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"My Docs\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_type_rejected() {
        // nav must be an array of tables, not a string
        let result: Result<SiteConfig, _> = toml::from_str("[theme]\nnav = \"home\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        // Default root is empty PathBuf, set during config loading
        assert_eq!(config.get_root(), Path::new(""));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert!(config.cli.is_none());
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert_eq!(config.site.base, "/");
        assert!(config.site.clean_urls);
        assert_eq!(config.site.out_dir, "dist");
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\ndescription = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_complete_config_passes_section_validation() {
        let config = test_parse_config(
            r#"
[site]
title = "IrysGit & GitHirys Docs"
description = "Complete documentation for IrysGit CLI and GitHirys web platform"
base = "/"
clean_urls = true
out_dir = "dist"

[[site.head]]
tag = "link"
attrs = { rel = "icon", href = "/sprite_favicon.webp" }

[[site.head]]
tag = "meta"
attrs = { name = "viewport", content = "width=device-width, initial-scale=1.0" }

[theme]
logo = "/logo.png"

[[theme.nav]]
text = "Home"
link = "/"

[[theme.nav]]
text = "Guide"
link = "/guide/introduction"

[[theme.nav]]
text = "Commands"
link = "/api/commands"

[[theme.sidebar."/guide/"]]
text = "Getting Started"
items = [
    { text = "Introduction", link = "/guide/introduction" },
    { text = "Installation", link = "/guide/installation" },
    { text = "Quick Start", link = "/guide/quick-start" },
]

[[theme.sidebar."/guide/"]]
text = "Core Concepts"
items = [
    { text = "How It Works", link = "/guide/how-it-works" },
    { text = "Permissions", link = "/guide/permissions" },
]

[[theme.sidebar."/api/"]]
text = "API Reference"
items = [
    { text = "Commands Overview", link = "/api/commands" },
    { text = "Repository Management", link = "/api/repository" },
]

[theme.footer]
message = "Released under the MIT License."
copyright = "Copyright © 2024 IrysGit & GitHirys"

[theme.edit_link]
pattern = "https://github.com/user/docs/edit/main/:path"
text = "Edit this page on GitHub"
"#,
        );

        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        config.theme.validate(&mut diag);
        assert!(diag.is_empty(), "unexpected errors: {:?}", diag.errors());

        // Entries come back unchanged, in declaration order
        assert_eq!(config.theme.nav[0].link, "/");
        assert_eq!(config.theme.nav[1].link, "/guide/introduction");
        assert_eq!(config.theme.sidebar["/guide/"][1].text, "Core Concepts");
    }

    #[test]
    fn test_reparse_is_structurally_identical() {
        // Loading the same content twice yields the same config.
        let content = r#"
[site]
title = "Docs"
description = "Project docs"

[[site.head]]
tag = "meta"
attrs = { name = "viewport", content = "width=device-width, initial-scale=1.0" }

[[theme.nav]]
text = "Home"
link = "/"

[[theme.sidebar."/guide/"]]
text = "Getting Started"
items = [ { text = "Introduction", link = "/guide/introduction" } ]
"#;
        let a = SiteConfig::from_str(content).unwrap();
        let b = SiteConfig::from_str(content).unwrap();
        assert_eq!(
            toml::to_string(&a).unwrap(),
            toml::to_string(&b).unwrap()
        );
    }
}
