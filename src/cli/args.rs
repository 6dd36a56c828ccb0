//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// depgate - install optional dependencies only when they are missing.
#[derive(Debug, Parser)]
#[command(name = "depgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the plan file (default: depgate.yml in the working directory)
    #[arg(short, long, global = true, env = "DEPGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report which dependencies are present, without installing anything
    Check(CheckArgs),

    /// Install every missing dependency
    Apply(ApplyArgs),
}

/// Registry answers forced from the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct RegistryArgs {
    /// Treat a registry key as present, e.g. 'HKLM\SOFTWARE\GPL Ghostscript\10.05'.
    /// When given, registry checks answer from these keys only.
    #[arg(long = "assume-key", value_name = "KEY")]
    pub assume_keys: Vec<String>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

/// Arguments for the `apply` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ApplyArgs {
    /// Evaluate and report, but launch no installers
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with status 1 if any installer failed
    #[arg(long)]
    pub strict: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub registry: RegistryArgs,
}
