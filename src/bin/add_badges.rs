//! `add-badges` entry point.

use std::process::ExitCode;

use clap::Parser;
use upkeep::cli::{self, AddBadgesCli, AddBadgesCommand};
use upkeep::ui::{OutputMode, TerminalUI};

fn main() -> ExitCode {
    let args = AddBadgesCli::parse();
    let debug = args.global.debug;
    let mut ui = TerminalUI::new(OutputMode::from_quiet(args.global.quiet));

    cli::run(&AddBadgesCommand::new(args), debug, &mut ui)
}
