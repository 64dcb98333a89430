//! Facts read from the project manifest.
//!
//! These are plain text scans of `pyproject.toml` (and `package.json` for
//! the version). Anything unreadable counts as absent.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::probe::Probe;

/// Python project manifest.
pub const PYPROJECT: &str = "pyproject.toml";

/// Node project manifest, consulted for the version only.
pub const PACKAGE_JSON: &str = "package.json";

/// Files whose presence marks a Python project.
pub const PYTHON_MARKERS: &[&str] = &["pyproject.toml", "setup.py", "requirements.txt"];

/// Standalone ruff configuration files.
pub const RUFF_CONFIGS: &[&str] = &["ruff.toml", ".ruff.toml"];

static VERSION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"version = "(.*?)""#).unwrap());

static REQUIRES_PYTHON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"requires-python = "(.*?)""#).unwrap());

/// The part of package.json we care about.
#[derive(Debug, Deserialize)]
struct PackageJson {
    version: Option<String>,
}

/// Read a manifest, treating any failure as absent.
pub(crate) fn read_optional(probe: &dyn Probe, path: &str) -> Option<String> {
    if !probe.exists(path) {
        return None;
    }
    match probe.read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::debug!("Ignoring unreadable {}: {:#}", path, e);
            None
        }
    }
}

/// Version string from the first `version = "..."` line of a pyproject.
pub fn version_from_pyproject(content: &str) -> Option<String> {
    content
        .lines()
        .filter(|line| line.trim().starts_with("version ="))
        .find_map(|line| VERSION_LINE.captures(line))
        .map(|caps| caps[1].to_string())
        .filter(|v| !v.is_empty())
}

/// Top-level `"version"` string of a package.json document.
pub fn version_from_package_json(content: &str) -> Option<String> {
    match serde_json::from_str::<PackageJson>(content) {
        Ok(package) => package.version.filter(|v| !v.is_empty()),
        Err(e) => {
            tracing::debug!("Ignoring malformed {}: {}", PACKAGE_JSON, e);
            None
        }
    }
}

/// Runtime constraint from `requires-python`, rendered as `3.11+`.
pub fn python_constraint(content: &str) -> Option<String> {
    let caps = REQUIRES_PYTHON.captures(content)?;
    let version = caps[1].replace(">=", "").replace('>', "");
    let version = version.trim();
    if version.is_empty() {
        return None;
    }
    Some(format!("{}+", version))
}

/// Project version from pyproject.toml, then package.json.
pub fn detect_version(probe: &dyn Probe) -> Option<String> {
    if let Some(version) = read_optional(probe, PYPROJECT).and_then(|c| version_from_pyproject(&c))
    {
        return Some(version);
    }
    read_optional(probe, PACKAGE_JSON).and_then(|c| version_from_package_json(&c))
}

/// Declared Python version constraint, if any.
pub fn detect_python_version(probe: &dyn Probe) -> Option<String> {
    read_optional(probe, PYPROJECT).and_then(|c| python_constraint(&c))
}

/// Whether any Python project marker exists.
pub fn is_python_repo(probe: &dyn Probe) -> bool {
    PYTHON_MARKERS.iter().any(|f| probe.exists(f))
}

/// Whether pyproject.toml configures black.
pub fn uses_black(probe: &dyn Probe) -> bool {
    read_optional(probe, PYPROJECT).is_some_and(|c| c.contains("[tool.black]"))
}

/// Whether ruff is configured in pyproject.toml or a standalone file.
pub fn uses_ruff(probe: &dyn Probe) -> bool {
    read_optional(probe, PYPROJECT).is_some_and(|c| c.contains("[tool.ruff]"))
        || RUFF_CONFIGS.iter().any(|f| probe.exists(f))
}
