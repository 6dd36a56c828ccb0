//! depgate CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use depgate::cli::{Cli, CommandDispatcher};
use depgate::ui::{should_use_colors, Console, GateTheme, OutputMode, SpinnerAwareWriter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("depgate=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("depgate=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(SpinnerAwareWriter::default),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("depgate starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let colors = !cli.no_color && should_use_colors();
    let console = Console::new(output_mode, colors);

    let working_dir = std::env::current_dir().unwrap_or_default();
    let dispatcher = CommandDispatcher::new(working_dir);

    match dispatcher.dispatch(&cli, &console) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            let theme = if colors {
                GateTheme::new()
            } else {
                GateTheme::plain()
            };
            eprintln!("{}", theme.format_error(&format!("Error: {}", e)));
            ExitCode::from(1)
        }
    }
}
