//! Sitedef - declarative configuration for documentation sites.
//!
//! Loads `sitedef.toml`, validates it against the generator schema, and
//! hands the result to the external static-site generator as JSON.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::Init { dry, .. } => cli::init::new_site(&config, *dry),
        Commands::Check { .. } => cli::check::check_config(&config),
        Commands::Export { pretty, output } => {
            cli::export::export_config(&config, *pretty, output.as_deref())
        }
    }
}
