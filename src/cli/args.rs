//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Sitedef documentation-site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// Config file path (default: sitedef.toml)
    #[arg(short = 'C', long, default_value = "sitedef.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new site with a commented sitedef.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template to stdout instead of writing files
        #[arg(short, long)]
        dry: bool,
    },

    /// Load and validate the configuration
    #[command(visible_alias = "c")]
    Check {
        /// Treat warnings (e.g. unknown fields) as errors
        #[arg(short, long)]
        strict: bool,
    },

    /// Emit the validated configuration as generator JSON
    #[command(visible_alias = "e")]
    Export {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
    pub const fn is_export(&self) -> bool {
        matches!(self.command, Commands::Export { .. })
    }

    /// True when warnings should halt the run (`check --strict`).
    pub const fn is_strict(&self) -> bool {
        matches!(self.command, Commands::Check { strict: true })
    }
}
