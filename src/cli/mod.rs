//! Command-line interface for the upkeep tools.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//!
//! The binaries in `src/bin/` only parse arguments and call [`run`].

pub mod args;
pub mod commands;

pub use args::{AddBadgesCli, GlobalArgs, IncrementVersionCli};
pub use commands::{AddBadgesCommand, Command, CommandResult, IncrementVersionCommand};

use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::ui::UserInterface;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("upkeep=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("upkeep=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Set up logging, execute `command` and turn the outcome into an exit code.
pub fn run(command: &dyn Command, debug: bool, ui: &mut dyn UserInterface) -> ExitCode {
    init_tracing(debug);

    match command.execute(ui) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
