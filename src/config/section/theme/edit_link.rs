//! Edit-link configuration: the per-page "view source" URL template.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::{LinkKind, classify_link};

/// Placeholder replaced by the generator with the page source path.
pub const PATH_PLACEHOLDER: &str = ":path";

/// `[theme.edit_link]` configuration.
///
/// # Example
///
/// ```toml
/// [theme.edit_link]
/// pattern = "https://github.com/user/docs/edit/main/:path"
/// text = "Edit this page on GitHub"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.edit_link")]
pub struct EditLinkConfig {
    /// URL template containing `:path` exactly once.
    #[config(inline_doc)]
    pub pattern: Option<String>,

    /// Link label shown on each page.
    #[config(default = "Edit this page", inline_doc)]
    pub text: String,
}

impl Default for EditLinkConfig {
    fn default() -> Self {
        Self {
            pattern: None,
            text: "Edit this page".into(),
        }
    }
}

impl EditLinkConfig {
    /// Validate the edit link.
    ///
    /// # Checks
    /// - `pattern`, when set, contains `:path` exactly once
    /// - `pattern` is an absolute http(s) URL
    /// - `text` must not be empty when a pattern is set
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(pattern) = &self.pattern else {
            return;
        };

        match pattern.matches(PATH_PLACEHOLDER).count() {
            1 => {}
            0 => diag.error_with_hint(
                Self::FIELDS.pattern,
                format!("pattern must contain '{PATH_PLACEHOLDER}'"),
                "e.g. \"https://github.com/user/docs/edit/main/:path\"",
            ),
            n => diag.error(
                Self::FIELDS.pattern,
                format!("pattern contains '{PATH_PLACEHOLDER}' {n} times, expected exactly once"),
            ),
        }

        if classify_link(pattern) != LinkKind::Absolute {
            diag.error_with_hint(
                Self::FIELDS.pattern,
                format!("'{}' is not an absolute http(s) URL", pattern),
                "the generator substitutes ':path' into a full repository URL",
            );
        }

        if self.text.is_empty() {
            diag.error(Self::FIELDS.text, "text must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_pattern(pattern: &str) -> EditLinkConfig {
        EditLinkConfig {
            pattern: Some(pattern.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_unset_pattern_is_fine() {
        let mut diag = ConfigDiagnostics::new();
        EditLinkConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_single_placeholder_accepted() {
        let mut diag = ConfigDiagnostics::new();
        with_pattern("https://github.com/user/docs/edit/main/:path").validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_missing_placeholder_rejected() {
        let mut diag = ConfigDiagnostics::new();
        with_pattern("https://github.com/user/docs/edit/main/").validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.edit_link.pattern");
    }

    #[test]
    fn test_repeated_placeholder_rejected() {
        let mut diag = ConfigDiagnostics::new();
        with_pattern("https://example.com/:path/:path").validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("2 times"));
    }

    #[test]
    fn test_relative_pattern_rejected() {
        let mut diag = ConfigDiagnostics::new();
        with_pattern("/edit/main/:path").validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_empty_text_rejected_when_pattern_set() {
        let mut config = with_pattern("https://example.com/edit/:path");
        config.text = String::new();
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.edit_link.text");
    }
}
