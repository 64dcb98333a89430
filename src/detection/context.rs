//! The Repository Context: everything badge selection depends on.

use std::collections::BTreeSet;

use crate::config::{RepoSettings, RepoSlug};
use crate::probe::Probe;

use super::{manifest, repository};

/// Workflows that have a badge of their own.
pub const KNOWN_WORKFLOWS: &[&str] = &["lint", "tests", "codeql"];

/// Read-only facts about the current checkout.
///
/// Built once per run by [`RepoContext::detect`]; tests usually construct
/// it directly and flip the fields they care about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoContext {
    /// Repository identity.
    pub slug: RepoSlug,
    /// Default branch name.
    pub branch: String,
    /// Statically detected project version.
    pub version: Option<String>,
    /// A Python project marker exists.
    pub python_project: bool,
    /// Declared Python constraint, e.g. `3.11+`.
    pub python_version: Option<String>,
    /// A license file carries an MIT notice.
    pub mit_license: bool,
    /// Coverage is uploaded to codecov.
    pub codecov: bool,
    /// Which of [`KNOWN_WORKFLOWS`] exist.
    pub workflows: BTreeSet<String>,
    /// Black is configured.
    pub black: bool,
    /// Ruff is configured.
    pub ruff: bool,
    /// Published documentation exists.
    pub docs: bool,
    /// The repository has at least one tag.
    pub has_tags: bool,
}

impl RepoContext {
    /// An empty context for `slug` on `branch`: nothing detected.
    pub fn new(slug: RepoSlug, branch: impl Into<String>) -> Self {
        Self {
            slug,
            branch: branch.into(),
            ..Default::default()
        }
    }

    /// Run every detector against `probe`.
    pub fn detect(probe: &dyn Probe, settings: &RepoSettings) -> Self {
        let workflows = KNOWN_WORKFLOWS
            .iter()
            .filter(|name| repository::has_workflow(probe, name))
            .map(|name| name.to_string())
            .collect();

        let context = Self {
            slug: settings.slug.clone(),
            branch: settings.branch.clone(),
            version: manifest::detect_version(probe),
            python_project: manifest::is_python_repo(probe),
            python_version: manifest::detect_python_version(probe),
            mit_license: repository::has_mit_license(probe),
            codecov: repository::uses_codecov(probe),
            workflows,
            black: manifest::uses_black(probe),
            ruff: manifest::uses_ruff(probe),
            docs: repository::has_docs(probe, settings),
            has_tags: repository::has_tags(probe, settings),
        };

        tracing::debug!(?context, "Detected repository context");
        context
    }

    /// Whether the named workflow exists.
    pub fn has_workflow(&self, name: &str) -> bool {
        self.workflows.contains(name)
    }

    /// Add a workflow by name.
    pub fn with_workflow(mut self, name: &str) -> Self {
        self.workflows.insert(name.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::MockProbe;
    use serde_json::json;

    #[test]
    fn empty_checkout_detects_nothing() {
        let settings = RepoSettings::new(RepoSlug::new("owner", "repo"));
        let context = RepoContext::detect(&MockProbe::new(), &settings);

        assert_eq!(context, RepoContext::new(RepoSlug::new("owner", "repo"), "master"));
    }

    #[test]
    fn detects_full_python_project() {
        let settings = RepoSettings::new(RepoSlug::new("owner", "repo"))
            .with_branch(Some("main"))
            .with_token(Some("tok"));
        let probe = MockProbe::new()
            .with_file(
                "pyproject.toml",
                "[project]\nversion = \"0.3.1\"\nrequires-python = \">=3.10\"\n[tool.black]\n[tool.ruff]\n",
            )
            .with_file("LICENSE", "MIT License")
            .with_file(".github/workflows/lint.yml", "")
            .with_file(".github/workflows/tests.yml", "uses: codecov/codecov-action@v4")
            .with_file("mkdocs.yml", "")
            .with_json(&settings.tags_url(), json!([{"name": "v0.3.0"}]));

        let context = RepoContext::detect(&probe, &settings);

        assert_eq!(context.branch, "main");
        assert_eq!(context.version.as_deref(), Some("0.3.1"));
        assert!(context.python_project);
        assert_eq!(context.python_version.as_deref(), Some("3.10+"));
        assert!(context.mit_license);
        assert!(context.codecov);
        assert!(context.has_workflow("lint"));
        assert!(context.has_workflow("tests"));
        assert!(!context.has_workflow("codeql"));
        assert!(context.black);
        assert!(context.ruff);
        assert!(context.docs);
        assert!(context.has_tags);
    }

    #[test]
    fn failing_probes_do_not_affect_other_categories() {
        let settings = RepoSettings::new(RepoSlug::new("owner", "repo"));
        let probe = MockProbe::new()
            .with_unreadable("pyproject.toml")
            .with_file("LICENSE", "MIT License");

        let context = RepoContext::detect(&probe, &settings);

        assert!(context.mit_license);
        assert!(context.python_project);
        assert!(context.version.is_none());
        assert!(!context.has_tags);
        assert!(!context.docs);
    }
}
