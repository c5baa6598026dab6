//! `check` command: load, validate, summarize.

use crate::{config::SiteConfig, debug, log};
use anyhow::Result;

/// Report on an already-loaded configuration.
///
/// Validation runs during `SiteConfig::load`; reaching this point means
/// the file parsed and every check passed. All that is left is the
/// operator-facing summary.
pub fn check_config(config: &SiteConfig) -> Result<()> {
    let display_path = config
        .config_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.config_path.display().to_string());

    let groups: usize = config.theme.sidebar.values().map(Vec::len).sum();
    let items: usize = config
        .theme
        .sidebar
        .values()
        .flatten()
        .map(|group| group.items.len())
        .sum();

    log!("check"; "{} is valid", display_path);
    log!(
        "check";
        "{} nav entries, {} sidebar prefixes ({} groups, {} links), {} head tags",
        config.theme.nav.len(),
        config.theme.sidebar.len(),
        groups,
        items,
        config.site.head.len()
    );

    debug!("check"; "site root: {}", config.get_root().display());
    debug!("check"; "output directory: {}", config.root_join(&config.site.out_dir).display());

    Ok(())
}
