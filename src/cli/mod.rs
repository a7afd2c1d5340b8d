//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::render::RenderStyle;
use crate::{Config, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;
pub mod output;

/// State table visualizer CLI
#[derive(Parser, Debug)]
#[command(name = "state-table-viz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render transition tables to dot documents
    Render {
        /// Path to the transition table file (TOML or JSON)
        #[arg(short, long)]
        tables: PathBuf,

        /// Render only this machine
        #[arg(short, long)]
        machine: Option<String>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Output style (overrides config and table settings)
        #[arg(short, long, value_enum)]
        style: Option<RenderStyle>,

        /// Print documents to stdout instead of writing files
        #[arg(long)]
        stdout: bool,
    },

    /// Check that every table can be normalized
    Validate {
        /// Path to the transition table file (TOML or JSON)
        #[arg(short, long)]
        tables: PathBuf,
    },

    /// Print per-machine graph statistics
    Stats {
        /// Path to the transition table file (TOML or JSON)
        #[arg(short, long)]
        tables: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text table
    Table,
}

/// Execute the CLI command
pub async fn execute(args: Cli, config: Config) -> Result<()> {
    match args.command {
        Commands::Render {
            tables,
            machine,
            out_dir,
            style,
            stdout,
        } => {
            let params = commands::render::RenderParams {
                tables,
                machine,
                out_dir,
                style,
                stdout,
            };
            commands::render::execute(params, config).await
        }
        Commands::Validate { tables } => commands::validate::execute(tables),
        Commands::Stats { tables, format } => commands::stats::execute(tables, format),
    }
}
