//! In-memory probe for testing.
//!
//! `MockProbe` answers from a fixed set of files and canned HTTP responses
//! and records every request it sees, so detection can be asserted on
//! without a checkout or a network.
//!
//! # Example
//!
//! ```
//! use upkeep::probe::{MockProbe, Probe};
//!
//! let probe = MockProbe::new()
//!     .with_file("pyproject.toml", "[tool.ruff]\n")
//!     .with_head("https://owner.github.io/repo/", 200);
//!
//! assert!(probe.exists("pyproject.toml"));
//! assert_eq!(probe.http_head("https://owner.github.io/repo/").unwrap(), 200);
//! assert_eq!(probe.requests(), vec!["HEAD https://owner.github.io/repo/".to_string()]);
//! ```

use anyhow::{anyhow, bail, Result};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::Probe;

/// Fake probe with configurable files and responses.
#[derive(Debug, Default)]
pub struct MockProbe {
    files: BTreeMap<String, String>,
    dirs: BTreeSet<String>,
    unreadable: HashSet<String>,
    heads: HashMap<String, u16>,
    json: HashMap<String, Value>,
    requests: RefCell<Vec<String>>,
    tokens: RefCell<Vec<Option<String>>>,
}

impl MockProbe {
    /// Create an empty probe: no files, every request fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content. Parent directories exist implicitly.
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    /// Add an empty directory.
    pub fn with_dir(mut self, path: &str) -> Self {
        self.dirs.insert(path.trim_end_matches('/').to_string());
        self
    }

    /// Add a file that exists but cannot be read.
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.files.insert(path.to_string(), String::new());
        self.unreadable.insert(path.to_string());
        self
    }

    /// Answer HEAD requests to `url` with `status`.
    pub fn with_head(mut self, url: &str, status: u16) -> Self {
        self.heads.insert(url.to_string(), status);
        self
    }

    /// Answer GET requests to `url` with `body`.
    pub fn with_json(mut self, url: &str, body: Value) -> Self {
        self.json.insert(url.to_string(), body);
        self
    }

    /// Requests seen so far, as `METHOD url`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Tokens passed to `http_get_json`, in call order.
    pub fn tokens(&self) -> Vec<Option<String>> {
        self.tokens.borrow().clone()
    }

    fn is_dir(&self, path: &str) -> bool {
        let prefix = format!("{}/", path.trim_end_matches('/'));
        self.dirs.contains(path.trim_end_matches('/'))
            || self.dirs.iter().any(|d| d.starts_with(&prefix))
            || self.files.keys().any(|f| f.starts_with(&prefix))
    }
}

impl Probe for MockProbe {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path) || self.is_dir(path)
    }

    fn read_to_string(&self, path: &str) -> Result<String> {
        if self.unreadable.contains(path) {
            bail!("permission denied: {}", path);
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("no such file: {}", path))
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>> {
        if !self.is_dir(path) {
            bail!("no such directory: {}", path);
        }
        let prefix = format!("{}/", path.trim_end_matches('/'));
        let names: BTreeSet<String> = self
            .files
            .keys()
            .chain(self.dirs.iter())
            .filter_map(|p| p.strip_prefix(&prefix))
            .filter_map(|rest| rest.split('/').next())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
        Ok(names.into_iter().collect())
    }

    fn http_head(&self, url: &str) -> Result<u16> {
        self.requests.borrow_mut().push(format!("HEAD {}", url));
        self.heads
            .get(url)
            .copied()
            .ok_or_else(|| anyhow!("connection refused: {}", url))
    }

    fn http_get_json(&self, url: &str, token: Option<&str>) -> Result<Value> {
        self.requests.borrow_mut().push(format!("GET {}", url));
        self.tokens.borrow_mut().push(token.map(String::from));
        self.json
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("connection refused: {}", url))
    }
}
