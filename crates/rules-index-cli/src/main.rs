//! rules-index CLI tool.
//!
//! Usage:
//! ```bash
//! rules-index [OPTIONS]
//! rules-index generate [--output PATH]
//! rules-index list-rules
//! rules-index init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Regenerates the rules index document for a lint plugin's docs
#[derive(Parser)]
#[command(name = "rules-index")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the rules manifest
    #[arg(short, long, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the rules index document (default)
    Generate {
        /// Destination path (overrides the manifest `output` setting)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the rules declared in the manifest
    ListRules {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize a starter manifest file
    Init {
        /// Overwrite existing manifest
        #[arg(long)]
        force: bool,
    },
}

/// Output format for list-rules.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Bare invocation regenerates the index with defaults.
    let command = cli
        .command
        .unwrap_or(Commands::Generate { output: None });

    match command {
        Commands::Generate { output } => {
            commands::generate::run(cli.manifest.as_deref(), output.as_deref())
        }
        Commands::ListRules { format } => commands::list_rules::run(cli.manifest.as_deref(), format),
        Commands::Init { force } => commands::init::run(force),
    }
}
