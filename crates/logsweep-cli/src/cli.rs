//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Logsweep - disk-space-bounded retention for rotated log files.
#[derive(Debug, Parser)]
#[command(name = "logsweep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "text")]
    pub format: CliFormat,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable summary (default)
    Text,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one cleanup pass and exit
    Sweep(SweepArgs),

    /// Run cleanup passes on an interval until Ctrl+C
    Watch(WatchArgs),
}

/// Arguments shared by the sweep and watch commands.
#[derive(Debug, Parser)]
pub struct SweepArgs {
    /// Byte budget per directory (omit to disable cleanup entirely)
    #[arg(short, long)]
    pub budget: Option<u64>,

    /// Log directory to scan (repeatable)
    #[arg(short, long = "dir")]
    pub dirs: Vec<PathBuf>,

    /// Program name to match (defaults to the current executable's stem)
    #[arg(long)]
    pub program: Option<String>,

    /// User name to match (defaults to $USER)
    #[arg(long)]
    pub user: Option<String>,

    /// Log what would be deleted without deleting
    #[arg(long)]
    pub dry_run: bool,

    /// Path that must never be deleted (repeatable)
    #[arg(long = "protect")]
    pub protected: Vec<PathBuf>,
}

/// Arguments for the watch command.
#[derive(Debug, Parser)]
pub struct WatchArgs {
    #[command(flatten)]
    pub sweep: SweepArgs,

    /// Minutes between passes
    #[arg(short, long)]
    pub interval_minutes: Option<u64>,
}
