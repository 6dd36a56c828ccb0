//! Command-line interface for depgate.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{ApplyArgs, CheckArgs, Cli, Commands};
pub use commands::{Command, CommandDispatcher, CommandResult};
