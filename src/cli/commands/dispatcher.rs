//! Command dispatching.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::Console;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing human output to `console`.
    fn execute(&self, console: &Console) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher resolving plan files from `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Route the CLI subcommand to its implementation and execute it.
    pub fn dispatch(&self, cli: &Cli, console: &Console) -> Result<CommandResult> {
        let config = cli.config.as_deref();
        match &cli.command {
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(&self.working_dir, config, args.clone());
                cmd.execute(console)
            }
            Commands::Apply(args) => {
                let cmd = super::apply::ApplyCommand::new(&self.working_dir, config, args.clone());
                cmd.execute(console)
            }
        }
    }
}
