//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Static paths come from `#[derive(Config)]`, which generates
/// compile-time checked field path accessors. Collection entries
/// (sidebar groups, nav items, head tags) extend a static path with
/// keys and indices at validation time.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteSectionConfig {
///     pub title: String,
/// }
///
/// // Generated:
/// impl SiteSectionConfig {
///     pub const FIELDS: SiteSectionConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(SiteSectionConfig::FIELDS.title, "required");
///
/// // Dynamic path for a sidebar item:
/// // theme.sidebar["/guide/"][0].items[1].link
/// let path = ThemeSectionConfig::FIELDS
///     .sidebar
///     .key("/guide/")
///     .index(0)
///     .child("items")
///     .index(1)
///     .child("link");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Build a path discovered at runtime (e.g. an unknown field reported
    /// by `serde_ignored`).
    #[inline]
    pub fn owned(path: impl Into<String>) -> Self {
        Self(Cow::Owned(path.into()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extend with a map key: `theme.sidebar` -> `theme.sidebar["/guide/"]`.
    pub fn key(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}[\"{}\"]", self.0, key)))
    }

    /// Extend with a sequence index: `theme.nav` -> `theme.nav[0]`.
    pub fn index(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{}]", self.0, index)))
    }

    /// Extend with a nested field name: `theme.nav[0]` -> `theme.nav[0].text`.
    pub fn child(&self, name: &str) -> Self {
        Self(Cow::Owned(format!("{}.{}", self.0, name)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
