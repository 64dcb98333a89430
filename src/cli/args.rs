//! CLI argument definitions.
//!
//! Both tools run with no arguments in CI; every flag has a default or an
//! environment fallback.

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::{RepoSettings, RepoSlug, DEFAULT_API_URL};
use crate::version::MANIFEST;

/// Flags shared by both tools.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GlobalArgs {
    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl GlobalArgs {
    /// Resolve the project root.
    pub fn project_root(&self) -> std::io::Result<PathBuf> {
        match &self.project {
            Some(project) => Ok(project.clone()),
            None => std::env::current_dir(),
        }
    }

    /// Resolve `path` against the project root.
    pub fn resolve(&self, path: &Path) -> std::io::Result<PathBuf> {
        Ok(self.project_root()?.join(path))
    }
}

/// Add missing status badges to the README.
#[derive(Debug, Parser)]
#[command(name = "add-badges")]
#[command(version, about, long_about = None)]
pub struct AddBadgesCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// README to update
    #[arg(long, default_value = "README.md")]
    pub readme: PathBuf,

    /// Repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Default branch, used for the coverage badge
    #[arg(long, env = "GITHUB_REF_NAME")]
    pub branch: Option<String>,

    /// Token for the tag listing request
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the GitHub API
    #[arg(long, env = "UPKEEP_GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// URL probed for published docs [default: https://<owner>.github.io/<name>/]
    #[arg(long, env = "UPKEEP_DOCS_URL")]
    pub docs_url: Option<String>,

    /// Skip network probes (no tags, docs from the filesystem only)
    #[arg(long)]
    pub offline: bool,

    /// Rewrite badges whose URL is out of date
    #[arg(long)]
    pub refresh: bool,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl AddBadgesCli {
    /// Detection settings from flags and environment.
    pub fn settings(&self) -> RepoSettings {
        RepoSettings::new(RepoSlug::from_env_value(self.repository.as_deref()))
            .with_branch(self.branch.as_deref())
            .with_token(self.token.as_deref())
            .with_api_url(self.api_url.as_str())
            .with_docs_url(self.docs_url.as_deref())
            .offline(self.offline)
    }
}

/// Increment the version in the project manifest.
#[derive(Debug, Parser)]
#[command(name = "increment-version")]
#[command(version, about, long_about = None)]
pub struct IncrementVersionCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Manifest holding `version = "X.Y.Z"`
    #[arg(long, default_value = MANIFEST)]
    pub manifest: PathBuf,

    /// Report the new version without writing
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_badges_defaults() {
        let cli = AddBadgesCli::parse_from(["add-badges"]);
        assert_eq!(cli.readme, PathBuf::from("README.md"));
        assert!(!cli.refresh);
        assert!(!cli.dry_run);
    }

    #[test]
    fn add_badges_settings_from_flags() {
        let cli = AddBadgesCli::parse_from([
            "add-badges",
            "--repository",
            "octo/widgets",
            "--branch",
            "main",
            "--api-url",
            "http://localhost:1234",
            "--docs-url",
            "http://localhost:1234/widgets/",
            "--offline",
        ]);
        let settings = cli.settings();

        assert_eq!(settings.slug, RepoSlug::new("octo", "widgets"));
        assert_eq!(settings.branch, "main");
        assert_eq!(settings.api_url, "http://localhost:1234");
        assert_eq!(settings.pages_url(), "http://localhost:1234/widgets/");
        assert!(settings.offline);
    }

    #[test]
    fn malformed_repository_uses_default() {
        let cli = AddBadgesCli::parse_from(["add-badges", "--repository", "nope"]);
        assert_eq!(cli.settings().slug, RepoSlug::default());
    }

    #[test]
    fn increment_version_defaults_to_pyproject() {
        let cli = IncrementVersionCli::parse_from(["increment-version"]);
        assert_eq!(cli.manifest, PathBuf::from("pyproject.toml"));
    }

    #[test]
    fn project_flag_resolves_paths() {
        let cli = IncrementVersionCli::parse_from(["increment-version", "--project", "/tmp/x"]);
        assert_eq!(
            cli.global.resolve(&cli.manifest).unwrap(),
            PathBuf::from("/tmp/x/pyproject.toml")
        );
    }
}
