//! Library integration tests.

use upkeep::badges::{applicable_badges, reconcile, ReconcileOptions};
use upkeep::config::{RepoSettings, RepoSlug};
use upkeep::detection::RepoContext;
use upkeep::probe::MockProbe;
use upkeep::UpkeepError;

#[test]
fn error_types_are_public() {
    let err = UpkeepError::VersionNotFound {
        path: "pyproject.toml".into(),
    };
    assert!(err.to_string().contains("pyproject.toml"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> upkeep::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use upkeep::cli::AddBadgesCli;

    let cli = AddBadgesCli::parse_from(["add-badges", "--refresh"]);
    assert!(cli.refresh);
}

#[test]
fn detect_and_reconcile_end_to_end() {
    let settings = RepoSettings::new(RepoSlug::new("octo", "widgets"));
    let probe = MockProbe::new()
        .with_file("pyproject.toml", "[project]\nversion = \"0.3.0\"\n[tool.black]\n")
        .with_file(".github/workflows/lint.yml", "");

    let context = RepoContext::detect(&probe, &settings);
    let badges = applicable_badges(&context);

    let readme = "# Widgets\n\n[![CI](https://example.com/ci.svg)](https://example.com)\n\nIntro.\n";
    let result = reconcile(readme, &badges, ReconcileOptions::default());

    assert_eq!(result.inserted, badges.len());
    let lines: Vec<&str> = result.text.lines().collect();
    assert_eq!(lines[2], "[![CI](https://example.com/ci.svg)](https://example.com)");
    assert!(lines[3].contains("img.shields.io/badge/version-0.3.0-blue"));
    assert!(lines[4].contains("img.shields.io/badge/python-3.8+-blue.svg"));
    assert!(lines[5].contains("actions/workflows/lint.yml/badge.svg"));
    assert!(lines[6].contains("code%20style-black"));
    assert_eq!(lines[lines.len() - 2], "");
    assert_eq!(lines[lines.len() - 1], "Intro.");
}
