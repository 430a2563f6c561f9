//! flatlint CLI tool.
//!
//! Usage:
//! ```bash
//! flatlint print [OPTIONS] [PATH]
//! flatlint ignores [OPTIONS] [PATH]
//! flatlint formatter
//! flatlint list-rules
//! flatlint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Shareable ESLint flat config and Prettier options for TypeScript projects
#[derive(Parser)]
#[command(name = "flatlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the assembled ESLint flat config
    Print {
        /// Project root (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Ignore patterns, replacing .gitignore scanning (can be specified multiple times)
        #[arg(short, long)]
        ignore: Vec<String>,
    },

    /// Print the ignore globs derived for a project
    Ignores {
        /// Project root (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Ignore patterns, replacing .gitignore scanning (can be specified multiple times)
        #[arg(short, long)]
        ignore: Vec<String>,
    },

    /// Print the shared Prettier options
    Formatter {
        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// List the curated rule tables
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for printed configs.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One item per line.
    Text,
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Single-line JSON.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so printed configs can be piped.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Print {
            path,
            format,
            ignore,
        } => commands::print::run(&path, format, ignore, cli.config.as_deref()),
        Commands::Ignores {
            path,
            format,
            ignore,
        } => commands::ignores::run(&path, format, ignore, cli.config.as_deref()),
        Commands::Formatter { format } => commands::formatter::run(format),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
