//! Proc macros for sitedef.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site metadata handed to the documentation generator.
//! pub struct SiteSectionConfig {
//!     /// Site title shown in the browser tab.
//!     pub title: String,
//!
//!     /// Root URL path.
//!     #[config(default = "/")]
//!     pub base: String,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - SiteSectionConfig::FIELDS.title -> FieldPath("site.title")
//! // - SiteSectionConfig::template() -> TOML string with comments
//! // - SiteSectionConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template (internal use)
//! - `#[config(hidden)]` - Hide from template output
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(inline_doc)]` - Render single-line docs as inline comments
//! - `#[config(sub)]` - Nested section, referenced instead of inlined
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SiteSectionConfig` → `site`
//! - `FooterConfig` → `footer`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
