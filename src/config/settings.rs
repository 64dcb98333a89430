//! Run settings resolved from flags and the CI environment.
//!
//! The binaries read these through clap's `env` support, so every value
//! here can come from a flag or from the variables GitHub Actions sets.

use std::fmt;

/// Owner used when `GITHUB_REPOSITORY` is missing or malformed.
pub const DEFAULT_OWNER: &str = "dgaida";

/// Repository name used when `GITHUB_REPOSITORY` is missing or malformed.
pub const DEFAULT_NAME: &str = "robot_mcp";

/// Branch used when `GITHUB_REF_NAME` is missing.
pub const DEFAULT_BRANCH: &str = "master";

/// Base URL of the tag-listing API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// An `owner/name` repository identifier.
///
/// # Example
///
/// ```
/// use upkeep::config::RepoSlug;
///
/// let slug = RepoSlug::parse("octo/widgets").unwrap();
/// assert_eq!(slug.owner, "octo");
/// assert_eq!(slug.name, "widgets");
///
/// // Malformed values fall back to the default pair.
/// let fallback = RepoSlug::from_env_value(Some("not-a-slug"));
/// assert_eq!(fallback, RepoSlug::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    /// Account or organisation.
    pub owner: String,
    /// Repository name.
    pub name: String,
}

impl RepoSlug {
    /// Create a slug from its parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse `owner/name`. Exactly one separator and two non-empty halves.
    pub fn parse(value: &str) -> Option<Self> {
        let (owner, name) = value.trim().split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some(Self::new(owner, name))
    }

    /// Resolve an optional environment value, falling back to the default pair.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.and_then(Self::parse) {
            Some(slug) => slug,
            None => {
                tracing::debug!(?value, "Repository slug missing or malformed, using default");
                Self::default()
            }
        }
    }
}

impl Default for RepoSlug {
    fn default() -> Self {
        Self::new(DEFAULT_OWNER, DEFAULT_NAME)
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Everything detection needs to know about the current CI run.
#[derive(Debug, Clone)]
pub struct RepoSettings {
    /// Repository being inspected.
    pub slug: RepoSlug,
    /// Branch used in coverage badge URLs.
    pub branch: String,
    /// Optional token for the tag-listing request.
    pub token: Option<String>,
    /// Base URL of the tag-listing API.
    pub api_url: String,
    /// Docs URL to probe instead of the conventional Pages address.
    pub docs_url: Option<String>,
    /// Skip network probes entirely.
    pub offline: bool,
}

impl RepoSettings {
    /// Settings for `slug` with default branch, API and no token.
    pub fn new(slug: RepoSlug) -> Self {
        Self {
            slug,
            branch: DEFAULT_BRANCH.to_string(),
            token: None,
            api_url: DEFAULT_API_URL.to_string(),
            docs_url: None,
            offline: false,
        }
    }

    /// Set the branch name. Blank values keep the default.
    pub fn with_branch(mut self, branch: Option<&str>) -> Self {
        if let Some(branch) = branch.map(str::trim).filter(|b| !b.is_empty()) {
            self.branch = branch.to_string();
        }
        self
    }

    /// Set the API token. Blank values are ignored.
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from);
        self
    }

    /// Override the tag-listing API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Probe `url` for published docs. Blank values keep the Pages address.
    pub fn with_docs_url(mut self, url: Option<&str>) -> Self {
        self.docs_url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(String::from);
        self
    }

    /// Disable or enable network probes.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// URL listing the repository's tags.
    pub fn tags_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/tags?per_page=1",
            self.api_url, self.slug.owner, self.slug.name
        )
    }

    /// URL probed for published docs, the GitHub Pages address by default.
    pub fn pages_url(&self) -> String {
        match &self.docs_url {
            Some(url) => url.clone(),
            None => format!("https://{}.github.io/{}/", self.slug.owner, self.slug.name),
        }
    }
}

impl Default for RepoSettings {
    fn default() -> Self {
        Self::new(RepoSlug::default())
    }
}
