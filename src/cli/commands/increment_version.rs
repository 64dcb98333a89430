//! Version command implementation.
//!
//! `increment-version` bumps the manifest version. Unlike `add-badges`,
//! a missing manifest or version line fails the build.

use std::path::Path;

use crate::cli::args::IncrementVersionCli;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::version::increment_file;

use super::{Command, CommandResult};

/// The increment-version command implementation.
pub struct IncrementVersionCommand {
    args: IncrementVersionCli,
}

impl IncrementVersionCommand {
    /// Create a new increment-version command.
    pub fn new(args: IncrementVersionCli) -> Self {
        Self { args }
    }

    /// Bump the manifest at `path`.
    pub fn run_with(&self, path: &Path, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let bump = increment_file(path, self.args.dry_run)?;
        ui.message(&format!("Incrementing version: {} -> {}", bump.old, bump.new));
        Ok(CommandResult::success())
    }
}

impl Command for IncrementVersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self.args.global.resolve(&self.args.manifest)?;
        self.run_with(&path, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UpkeepError;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn command(extra: &[&str]) -> IncrementVersionCommand {
        let mut argv = vec!["increment-version"];
        argv.extend_from_slice(extra);
        IncrementVersionCommand::new(IncrementVersionCli::parse_from(argv))
    }

    #[test]
    fn reports_old_and_new_version() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pyproject.toml");
        fs::write(&path, "[project]\nversion = \"2.3.9\"\n").unwrap();
        let mut ui = MockUI::new();

        command(&[]).run_with(&path, &mut ui).unwrap();

        assert_eq!(
            ui.messages(),
            &["Incrementing version: 2.3.9 -> 2.4.0".to_string()]
        );
        assert!(fs::read_to_string(&path).unwrap().contains("version = \"2.4.0\""));
    }

    #[test]
    fn missing_manifest_propagates() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let err = command(&[])
            .run_with(&temp.path().join("pyproject.toml"), &mut ui)
            .unwrap_err();

        assert!(matches!(err, UpkeepError::ManifestNotFound { .. }));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn execute_uses_project_flag() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pyproject.toml"), "version = \"0.1.0\"\n").unwrap();
        let project = temp.path().to_string_lossy().into_owned();
        let mut ui = MockUI::new();

        let result = command(&["--project", project.as_str()]).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(
            fs::read_to_string(temp.path().join("pyproject.toml")).unwrap(),
            "version = \"0.1.1\"\n"
        );
    }
}
