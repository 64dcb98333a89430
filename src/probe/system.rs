//! Probe backed by the local checkout and a blocking HTTP client.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use super::Probe;

/// Timeout for each outbound request.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Probes the real filesystem below `root` and the real network.
pub struct SystemProbe {
    root: PathBuf,
    client: Client,
    offline: bool,
}

impl SystemProbe {
    /// Create a probe rooted at `root` with the default 2-second timeout.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Self::with_timeout(root, PROBE_TIMEOUT)
    }

    /// Create a probe with a custom request timeout.
    pub fn with_timeout(root: impl Into<PathBuf>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("upkeep")
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            root: root.into(),
            client,
            offline: false,
        })
    }

    /// Refuse all network requests.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    fn ensure_online(&self, url: &str) -> Result<()> {
        if self.offline {
            bail!("offline mode, not requesting {}", url);
        }
        Ok(())
    }
}

impl Probe for SystemProbe {
    fn exists(&self, path: &str) -> bool {
        self.root.join(path).exists()
    }

    fn read_to_string(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        fs::read_to_string(&full).with_context(|| format!("Failed to read {}", full.display()))
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>> {
        let full = self.root.join(path);
        let mut names = Vec::new();
        for entry in
            fs::read_dir(&full).with_context(|| format!("Failed to list {}", full.display()))?
        {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn http_head(&self, url: &str) -> Result<u16> {
        self.ensure_online(url)?;
        let response = self
            .client
            .head(url)
            .send()
            .with_context(|| format!("Failed to reach {}", url))?;
        Ok(response.status().as_u16())
    }

    fn http_get_json(&self, url: &str, token: Option<&str>) -> Result<Value> {
        self.ensure_online(url)?;
        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json");

        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        response
            .json()
            .with_context(|| format!("Failed to parse JSON from {}", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    fn probe(temp: &TempDir) -> SystemProbe {
        SystemProbe::new(temp.path()).unwrap()
    }

    #[test]
    fn exists_checks_relative_to_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("LICENSE"), "MIT License").unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();

        let probe = probe(&temp);
        assert!(probe.exists("LICENSE"));
        assert!(probe.exists("docs"));
        assert!(!probe.exists("README.md"));
    }

    #[test]
    fn read_to_string_reports_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = probe(&temp).read_to_string("missing.txt").unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn list_dir_returns_sorted_names() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".github/workflows");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("tests.yml"), "").unwrap();
        fs::write(dir.join("lint.yml"), "").unwrap();

        let names = probe(&temp).list_dir(".github/workflows").unwrap();
        assert_eq!(names, vec!["lint.yml".to_string(), "tests.yml".to_string()]);
    }

    #[test]
    fn default_timeout_is_two_seconds() {
        assert_eq!(PROBE_TIMEOUT, Duration::from_secs(2));
    }

    #[test]
    fn get_json_sends_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/repos/owner/repo/tags")
                .header("Authorization", "Bearer secret-token");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"name":"v0.1.0"}]"#);
        });

        let temp = TempDir::new().unwrap();
        let value = probe(&temp)
            .http_get_json(&server.url("/repos/owner/repo/tags"), Some("secret-token"))
            .unwrap();

        mock.assert();
        assert_eq!(value[0]["name"], "v0.1.0");
    }

    #[test]
    fn get_json_fails_on_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/repos/owner/repo/tags");
            then.status(404).body("Not Found");
        });

        let temp = TempDir::new().unwrap();
        let err = probe(&temp)
            .http_get_json(&server.url("/repos/owner/repo/tags"), None)
            .unwrap_err();
        assert!(err.to_string().contains("404"), "got: {}", err);
    }

    #[test]
    fn head_returns_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::HEAD).path("/repo/");
            then.status(200);
        });

        let temp = TempDir::new().unwrap();
        let status = probe(&temp).http_head(&server.url("/repo/")).unwrap();
        assert_eq!(status, 200);
    }

    #[test]
    fn offline_probe_refuses_requests() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::HEAD).path("/repo/");
            then.status(200);
        });

        let temp = TempDir::new().unwrap();
        let probe = probe(&temp).offline(true);
        assert!(probe.http_head(&server.url("/repo/")).is_err());
        assert!(probe.http_get_json(&server.url("/repo/"), None).is_err());
        mock.assert_calls(0);
    }
}
