//! A single rendered badge.

use std::fmt;

/// What a badge reports on. Each category yields at most one badge per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeCategory {
    Version,
    Python,
    License,
    Coverage,
    Lint,
    Tests,
    StaticAnalysis,
    Black,
    Ruff,
    Docs,
    Maintenance,
    LastCommit,
}

impl BadgeCategory {
    /// Short lowercase name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Python => "python",
            Self::License => "license",
            Self::Coverage => "coverage",
            Self::Lint => "lint",
            Self::Tests => "tests",
            Self::StaticAnalysis => "codeql",
            Self::Black => "black",
            Self::Ruff => "ruff",
            Self::Docs => "docs",
            Self::Maintenance => "maintenance",
            Self::LastCommit => "last-commit",
        }
    }
}

impl fmt::Display for BadgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Markdown image link plus the substrings used to recognise it.
///
/// # Example
///
/// ```
/// use upkeep::badges::{Badge, BadgeCategory};
///
/// let badge = Badge::new(
///     BadgeCategory::Version,
///     "Version",
///     "https://img.shields.io/badge/version-1.0.0-blue",
///     None,
/// )
/// .with_identity("img.shields.io/badge/version-");
///
/// assert_eq!(badge.markdown, "![Version](https://img.shields.io/badge/version-1.0.0-blue)");
/// assert!(badge.is_present_in("![Version](https://img.shields.io/badge/version-0.9.0-blue)"));
/// assert!(!badge.is_current_in("![Version](https://img.shields.io/badge/version-0.9.0-blue)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Category this badge belongs to.
    pub category: BadgeCategory,
    /// Full Markdown snippet.
    pub markdown: String,
    /// Image URL inside the snippet.
    pub image_url: String,
    identity: String,
    equivalents: Vec<String>,
    supersedes: Vec<String>,
}

impl Badge {
    /// Build a badge. With a `link` the image is wrapped in a link.
    pub fn new(category: BadgeCategory, alt: &str, image_url: &str, link: Option<&str>) -> Self {
        let image = format!("![{}]({})", alt, image_url);
        let markdown = match link {
            Some(link) => format!("[{}]({})", image, link),
            None => image,
        };

        Self {
            category,
            markdown,
            image_url: image_url.to_string(),
            identity: image_url.to_string(),
            equivalents: Vec::new(),
            supersedes: Vec::new(),
        }
    }

    /// Use a stable prefix of the image URL instead of the full URL.
    pub fn with_identity(mut self, identity: &str) -> Self {
        self.identity = identity.to_string();
        self
    }

    /// Treat another badge's marker as "already present".
    pub fn also_matching(mut self, marker: &str) -> Self {
        self.equivalents.push(marker.to_string());
        self
    }

    /// Replace an existing badge containing `marker` instead of inserting.
    pub fn superseding(mut self, marker: &str) -> Self {
        self.supersedes.push(marker.to_string());
        self
    }

    /// Substring identifying this badge regardless of variable parts.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Markers of badges this one replaces.
    pub fn supersedes(&self) -> &[String] {
        &self.supersedes
    }

    /// Whether this badge, or an equivalent, already appears in `text`.
    pub fn is_present_in(&self, text: &str) -> bool {
        text.contains(&self.identity) || self.equivalents.iter().any(|m| text.contains(m))
    }

    /// Whether this exact image URL appears in `text`.
    pub fn is_current_in(&self, text: &str) -> bool {
        text.contains(&self.image_url)
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markdown)
    }
}
