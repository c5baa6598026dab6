//! `export` command: emit the validated configuration in the external
//! generator's JSON schema.
//!
//! The generator expects camelCase field names, `head` entries as
//! `[tagName, attributeMap]` pairs, and theme settings nested under
//! `themeConfig`. This module owns that mapping; the TOML schema stays
//! snake_case like every other section of `sitedef.toml`.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use serde_json::{Map, Value, json};
use std::{fs, path::Path};

/// Export the configuration as generator JSON.
pub fn export_config(config: &SiteConfig, pretty: bool, output: Option<&Path>) -> Result<()> {
    let value = to_generator_json(config);

    let rendered = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("export"; "wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Convert the loaded config into the generator's expected shape.
///
/// Key order is stable: top-level fields first, then `themeConfig` with
/// its sub-sections in declaration order.
pub fn to_generator_json(config: &SiteConfig) -> Value {
    let mut root = Map::new();
    root.insert("title".into(), json!(config.site.title));
    root.insert("description".into(), json!(config.site.description));
    root.insert("base".into(), json!(config.site.base));
    root.insert("cleanUrls".into(), json!(config.site.clean_urls));
    root.insert("outDir".into(), json!(config.site.out_dir));

    let head: Vec<Value> = config
        .site
        .head
        .iter()
        .map(|entry| json!([entry.tag, entry.attrs]))
        .collect();
    root.insert("head".into(), Value::Array(head));

    root.insert("themeConfig".into(), theme_json(config));
    Value::Object(root)
}

fn theme_json(config: &SiteConfig) -> Value {
    let theme = &config.theme;
    let mut out = Map::new();

    if let Some(logo) = &theme.logo {
        out.insert("logo".into(), json!(logo));
    }

    out.insert("nav".into(), json!(theme.nav));
    out.insert("sidebar".into(), json!(theme.sidebar));
    out.insert("socialLinks".into(), json!(theme.social_links));
    out.insert(
        "footer".into(),
        json!({
            "message": theme.footer.message,
            "copyright": theme.footer.copyright,
        }),
    );

    if let Some(pattern) = &theme.edit_link.pattern {
        out.insert(
            "editLink".into(),
            json!({
                "pattern": pattern,
                "text": theme.edit_link.text,
            }),
        );
    }

    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn sample_config() -> SiteConfig {
        test_parse_config(
            r#"
[site]
title = "Project Docs"
description = "Complete documentation"

[[site.head]]
tag = "link"
attrs = { rel = "icon", href = "/favicon.webp" }

[theme]
logo = "/logo.png"

[[theme.nav]]
text = "Home"
link = "/"

[[theme.sidebar."/guide/"]]
text = "Getting Started"
items = [ { text = "Introduction", link = "/guide/introduction" } ]

[theme.footer]
message = "Released under the MIT License."
copyright = "Copyright © 2024 Example"

[theme.edit_link]
pattern = "https://github.com/user/docs/edit/main/:path"
text = "Edit this page on GitHub"
"#,
        )
    }

    #[test]
    fn test_generator_field_names() {
        let value = to_generator_json(&sample_config());
        assert_eq!(value["title"], "Project Docs");
        assert_eq!(value["cleanUrls"], true);
        assert_eq!(value["outDir"], "dist");
        assert!(value["themeConfig"].is_object());
        assert_eq!(value["themeConfig"]["logo"], "/logo.png");
        assert_eq!(
            value["themeConfig"]["editLink"]["pattern"],
            "https://github.com/user/docs/edit/main/:path"
        );
    }

    #[test]
    fn test_head_exported_as_pairs() {
        let value = to_generator_json(&sample_config());
        let head = value["head"].as_array().unwrap();
        assert_eq!(head.len(), 1);
        assert_eq!(head[0][0], "link");
        assert_eq!(head[0][1]["rel"], "icon");
        assert_eq!(head[0][1]["href"], "/favicon.webp");
    }

    #[test]
    fn test_sidebar_keyed_by_prefix() {
        let value = to_generator_json(&sample_config());
        let groups = value["themeConfig"]["sidebar"]["/guide/"].as_array().unwrap();
        assert_eq!(groups[0]["text"], "Getting Started");
        assert_eq!(groups[0]["items"][0]["link"], "/guide/introduction");
    }

    #[test]
    fn test_optional_sections_omitted() {
        let config = test_parse_config("[site]\ntitle = \"Docs\"\ndescription = \"Docs\"");
        let value = to_generator_json(&config);
        let theme = value["themeConfig"].as_object().unwrap();
        assert!(!theme.contains_key("logo"));
        assert!(!theme.contains_key("editLink"));
        // socialLinks is always present, possibly empty
        assert_eq!(theme["socialLinks"], json!([]));
    }

    #[test]
    fn test_export_is_deterministic() {
        let config = sample_config();
        let a = serde_json::to_string(&to_generator_json(&config)).unwrap();
        let b = serde_json::to_string(&to_generator_json(&config)).unwrap();
        assert_eq!(a, b);
    }
}
