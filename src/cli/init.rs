//! `init` command: scaffold a new site directory.
//!
//! Writes a commented `sitedef.toml` generated from the section templates,
//! plus ignore files. With `--dry`, prints the template to stdout instead.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::section::{
    EditLinkConfig, FooterConfig, SiteSectionConfig, ThemeSectionConfig,
};
use crate::{config::SiteConfig, log};

/// Default config filename
const CONFIG_FILE: &str = "sitedef.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Commented examples for the collection fields the derive templates
/// cannot render (head tags, nav, sidebar, social links).
const COLLECTIONS_EXAMPLE: &str = r#"# Head tags injected into every generated page, in order:
# [[site.head]]
# tag = "link"
# attrs = { rel = "icon", href = "/favicon.webp" }
#
# [[site.head]]
# tag = "meta"
# attrs = { name = "viewport", content = "width=device-width, initial-scale=1.0" }

# Top navigation entries, in display order:
# [[theme.nav]]
# text = "Home"
# link = "/"
#
# [[theme.nav]]
# text = "Guide"
# link = "/guide/introduction"

# Sidebar groups keyed by URL prefix:
# [[theme.sidebar."/guide/"]]
# text = "Getting Started"
# items = [
#     { text = "Introduction", link = "/guide/introduction" },
#     { text = "Installation", link = "/guide/installation" },
# ]

# Social links shown in the navigation bar:
# [[theme.social_links]]
# icon = "github"
# link = "https://github.com/user/repo"
"#;

/// Create a new site with a default configuration
///
/// # Steps
/// 1. Validate target directory
/// 2. Create the directory if needed
/// 3. Write sitedef.toml and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();

    if let Err(e) = validate_target(root) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;

    write_config(root)?;
    write_ignore_files(root, Path::new(&site_config.site.out_dir))?;

    log!("init"; "Site initialized successfully");
    Ok(())
}

/// Refuse to overwrite an existing configuration.
fn validate_target(root: &Path) -> Result<()> {
    let config_path = root.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!(
            "'{}' already exists, refusing to overwrite",
            config_path.display()
        );
    }
    Ok(())
}

/// Generate sitedef.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Sitedef configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/sitedef/sitedef\n\n");

    // [site] section
    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');

    // [theme] section
    out.push_str(&ThemeSectionConfig::template_with_header());
    out.push('\n');

    // [theme.footer] section
    out.push_str(&FooterConfig::template_with_header());
    out.push('\n');

    // [theme.edit_link] section
    out.push_str(&EditLinkConfig::template_with_header());
    out.push('\n');

    // Commented examples for head, nav, sidebar and social links
    out.push_str(COLLECTIONS_EXAMPLE);

    out
}

/// Write default sitedef.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Patterns include:
/// - Output directory (e.g., `/dist/`)
/// - OS-specific files (`.DS_Store`)
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let patterns = [
        output_pattern.to_string_lossy().into_owned(),
        ".DS_Store".to_string(),
    ];

    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();

        let config_path = temp.path().join("sitedef.toml");
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[theme]"));
        assert!(content.contains("[theme.edit_link]"));
    }

    #[test]
    fn test_template_parses_cleanly() {
        // The scaffolded config must be accepted by our own parser
        // with no unknown fields.
        let content = generate_config_template();
        let config = crate::config::test_parse_config(&content);
        assert_eq!(config.site.base, "/");
        assert!(config.site.clean_urls);
    }

    #[test]
    fn test_existing_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("sitedef.toml"), "custom").unwrap();
        assert!(validate_target(temp.path()).is_err());
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path(), Path::new("dist")).unwrap();

        let gitignore = temp.path().join(".gitignore");
        assert!(gitignore.exists());

        let content = fs::read_to_string(&gitignore).unwrap();
        assert!(content.contains("/dist"));
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path(), Path::new("dist")).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }
}
