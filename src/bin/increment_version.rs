//! `increment-version` entry point.

use std::process::ExitCode;

use clap::Parser;
use upkeep::cli::{self, IncrementVersionCli, IncrementVersionCommand};
use upkeep::ui::{OutputMode, TerminalUI};

fn main() -> ExitCode {
    let args = IncrementVersionCli::parse();
    let debug = args.global.debug;
    let mut ui = TerminalUI::new(OutputMode::from_quiet(args.global.quiet));

    cli::run(&IncrementVersionCommand::new(args), debug, &mut ui)
}
