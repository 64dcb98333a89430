//! Facts about the repository layout and its hosting.

use crate::config::RepoSettings;
use crate::probe::Probe;

use super::manifest::read_optional;

/// Conventional license file names, checked in order.
pub const LICENSE_FILES: &[&str] = &["LICENSE", "LICENSE.txt", "LICENSE.md", "license"];

/// Standalone codecov configuration files.
pub const CODECOV_CONFIGS: &[&str] = &[".codecov.yml", "codecov.yml"];

/// Directory holding GitHub Actions workflows.
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// Documentation sources checked when the Pages probe fails.
pub const DOCS_PATHS: &[&str] = &["docs", "mkdocs.yml"];

/// Whether any license file carries an MIT notice.
pub fn has_mit_license(probe: &dyn Probe) -> bool {
    LICENSE_FILES.iter().any(|f| {
        read_optional(probe, f)
            .is_some_and(|c| c.contains("MIT License") || c.contains("MIT LICENSE"))
    })
}

fn is_workflow_file(name: &str) -> bool {
    name.ends_with(".yml") || name.ends_with(".yaml")
}

/// Whether coverage is uploaded to codecov.
pub fn uses_codecov(probe: &dyn Probe) -> bool {
    if CODECOV_CONFIGS.iter().any(|f| probe.exists(f)) {
        return true;
    }
    if !probe.exists(WORKFLOWS_DIR) {
        return false;
    }
    let names = match probe.list_dir(WORKFLOWS_DIR) {
        Ok(names) => names,
        Err(e) => {
            tracing::debug!("Ignoring unreadable {}: {:#}", WORKFLOWS_DIR, e);
            return false;
        }
    };
    names
        .iter()
        .filter(|name| is_workflow_file(name))
        .any(|name| {
            read_optional(probe, &format!("{}/{}", WORKFLOWS_DIR, name))
                .is_some_and(|c| c.contains("codecov/codecov-action"))
        })
}

/// Whether `.github/workflows/<name>.yml` or `.yaml` exists.
pub fn has_workflow(probe: &dyn Probe, name: &str) -> bool {
    ["yml", "yaml"]
        .iter()
        .any(|ext| probe.exists(&format!("{}/{}.{}", WORKFLOWS_DIR, name, ext)))
}

/// Whether published documentation exists.
///
/// A 200 from the GitHub Pages URL wins; otherwise a local docs directory
/// or mkdocs config counts.
pub fn has_docs(probe: &dyn Probe, settings: &RepoSettings) -> bool {
    let url = settings.pages_url();
    match probe.http_head(&url) {
        Ok(200) => return true,
        Ok(status) => tracing::debug!("Pages probe {} returned {}", url, status),
        Err(e) => tracing::debug!("Pages probe failed: {:#}", e),
    }
    DOCS_PATHS.iter().any(|p| probe.exists(p))
}

/// Whether the repository has at least one tag.
///
/// Any failure (network, status, malformed body) counts as no tags.
pub fn has_tags(probe: &dyn Probe, settings: &RepoSettings) -> bool {
    let url = settings.tags_url();
    let body = match probe.http_get_json(&url, settings.token.as_deref()) {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!("Tag listing failed: {:#}", e);
            return false;
        }
    };
    match body.as_array() {
        Some(tags) => {
            let latest = tags
                .first()
                .and_then(|tag| tag.get("name"))
                .and_then(|name| name.as_str());
            if let Some(name) = latest {
                tracing::debug!("Latest tag: {}", name);
            }
            !tags.is_empty()
        }
        None => {
            tracing::debug!("Unexpected tag listing from {}", url);
            false
        }
    }
}
