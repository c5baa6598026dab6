//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Classification of a `link` value found in nav, sidebar or social entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// Site-relative link starting with `/` (e.g. `/guide/introduction`).
    SiteRelative,
    /// Absolute http(s) URL with a valid host.
    Absolute,
    /// Anything else, with a description of what is wrong.
    Invalid(String),
}

/// Classify a link value.
///
/// The generator resolves site-relative links against `site.base`; absolute
/// URLs pass through untouched. Everything else is rejected here so the
/// build fails before the generator sees a dangling href.
///
/// # Examples
/// ```ignore
/// classify_link("/guide/introduction") -> SiteRelative
/// classify_link("https://example.com") -> Absolute
/// classify_link("guide/introduction")  -> Invalid(...)
/// classify_link("")                    -> Invalid(...)
/// ```
pub fn classify_link(link: &str) -> LinkKind {
    if link.is_empty() {
        return LinkKind::Invalid("link must not be empty".into());
    }

    if link.starts_with('/') {
        return LinkKind::SiteRelative;
    }

    match url::Url::parse(link) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                return LinkKind::Invalid(format!(
                    "scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ));
            }
            if parsed.host_str().is_none() {
                return LinkKind::Invalid("URL must have a valid host".into());
            }
            LinkKind::Absolute
        }
        Err(_) => LinkKind::Invalid(
            "link must start with '/' or be an absolute http(s) URL".into(),
        ),
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/docs/guide/        ← cwd
/// /home/user/docs/sitedef.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    // First check if config_name is an absolute path or exists in cwd
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    // Walk up from cwd looking for config file
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
