//! Manifest version bumping.
//!
//! The bump rule is an odometer on the two low fields: patch and minor
//! each roll over after 9, major is unbounded. `0.9.9` becomes `1.0.0`.

use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

use crate::error::{Result, UpkeepError};

/// Default manifest file name.
pub const MANIFEST: &str = "pyproject.toml";

/// Highest value of the minor and patch fields before they carry.
pub const FIELD_CAP: u64 = 9;

static VERSION_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"version = "(\d+)\.(\d+)\.(\d+)""#).unwrap());

static VERSION_TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)$").unwrap());

/// A `major.minor.patch` triple.
///
/// # Example
///
/// ```
/// use upkeep::version::Version;
///
/// let v: Version = "0.1.9".parse().unwrap();
/// assert_eq!(v.next().unwrap().to_string(), "0.2.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a version from its fields.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    fn from_captures(caps: &regex::Captures<'_>) -> Option<Self> {
        Some(Self::new(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        ))
    }

    /// The following version under the capped carry rule.
    ///
    /// Returns `None` when a field would overflow.
    pub fn next(&self) -> Option<Self> {
        let mut next = *self;
        next.patch = next.patch.checked_add(1)?;
        if next.patch > FIELD_CAP {
            next.patch = 0;
            next.minor = next.minor.checked_add(1)?;
        }
        if next.minor > FIELD_CAP {
            next.minor = 0;
            next.major = next.major.checked_add(1)?;
        }
        Some(next)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        VERSION_TRIPLE
            .captures(s.trim())
            .and_then(|caps| Self::from_captures(&caps))
            .ok_or_else(|| format!("invalid version: {}", s))
    }
}

/// Result of bumping a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBump {
    /// Version found in the manifest.
    pub old: Version,
    /// Version written back.
    pub new: Version,
    /// The rewritten manifest.
    pub text: String,
}

/// Why [`increment`] left a manifest untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BumpError {
    /// No line holds a numeric `version = "X.Y.Z"`.
    #[error("no version line")]
    NotFound,

    /// The version line exists but its fields do not fit, before or after the bump.
    #[error("version {0} cannot be incremented")]
    OutOfRange(String),
}

/// Bump the first `version = "X.Y.Z"` line in `manifest`.
///
/// Only lines starting with `version = "` (after indentation) are
/// considered, and only the first numeric one is changed. Every other byte
/// of the manifest, line endings included, is preserved.
pub fn increment(manifest: &str) -> std::result::Result<VersionBump, BumpError> {
    let mut offset = 0;
    for line in manifest.split_inclusive('\n') {
        if line.trim().starts_with("version = \"") {
            if let Some(caps) = VERSION_ASSIGNMENT.captures(line) {
                let literal = format!("{}.{}.{}", &caps[1], &caps[2], &caps[3]);
                let old = Version::from_captures(&caps)
                    .ok_or_else(|| BumpError::OutOfRange(literal.clone()))?;
                let new = old.next().ok_or(BumpError::OutOfRange(literal))?;

                let span = caps.get(0).map(|m| m.range()).unwrap_or_default();
                let start = offset + span.start;
                let end = offset + span.end;

                let mut text = String::with_capacity(manifest.len() + 2);
                text.push_str(&manifest[..start]);
                text.push_str(&format!("version = \"{}\"", new));
                text.push_str(&manifest[end..]);

                return Ok(VersionBump { old, new, text });
            }
        }
        offset += line.len();
    }
    Err(BumpError::NotFound)
}

/// Bump the manifest at `path`, writing it back unless `dry_run`.
///
/// A missing manifest, a manifest without a version line, or a version too
/// large to bump is an error. Nothing is written in any of these cases.
pub fn increment_file(path: &Path, dry_run: bool) -> Result<VersionBump> {
    if !path.exists() {
        return Err(UpkeepError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let bump = increment(&content).map_err(|e| match e {
        BumpError::NotFound => UpkeepError::VersionNotFound {
            path: path.to_path_buf(),
        },
        BumpError::OutOfRange(version) => UpkeepError::VersionOutOfRange {
            path: path.to_path_buf(),
            version,
        },
    })?;

    if dry_run {
        tracing::debug!("Dry run, not writing {}", path.display());
    } else {
        fs::write(path, &bump.text)?;
        tracing::info!("Wrote {}", path.display());
    }

    Ok(bump)
}
