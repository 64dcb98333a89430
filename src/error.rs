//! Error types for upkeep operations.
//!
//! This module defines [`UpkeepError`], the error type returned by the
//! library, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Missing inputs for the version incrementer are fatal and get their own variants
//! - Detection never returns errors; probe failures become "feature absent"
//! - Use `anyhow::Error` (via `UpkeepError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for upkeep operations.
#[derive(Debug, Error)]
pub enum UpkeepError {
    /// Project manifest does not exist.
    #[error("{} not found in the root of the repository", path.display())]
    ManifestNotFound { path: PathBuf },

    /// Manifest has no `version = "X.Y.Z"` line.
    #[error("Could not find version string in {}", path.display())]
    VersionNotFound { path: PathBuf },

    /// Manifest version is too large to increment.
    #[error("Version {} in {} cannot be incremented", version, path.display())]
    VersionOutOfRange { path: PathBuf, version: String },

    /// README to patch does not exist.
    #[error("{} not found", path.display())]
    ReadmeNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for upkeep operations.
pub type Result<T> = std::result::Result<T, UpkeepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_not_found_displays_path() {
        let err = UpkeepError::ManifestNotFound {
            path: PathBuf::from("pyproject.toml"),
        };
        assert_eq!(
            err.to_string(),
            "pyproject.toml not found in the root of the repository"
        );
    }

    #[test]
    fn version_not_found_displays_path() {
        let err = UpkeepError::VersionNotFound {
            path: PathBuf::from("pyproject.toml"),
        };
        assert!(err.to_string().contains("pyproject.toml"));
    }

    #[test]
    fn version_out_of_range_displays_version() {
        let err = UpkeepError::VersionOutOfRange {
            path: PathBuf::from("pyproject.toml"),
            version: "1.2.18446744073709551615".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Version 1.2.18446744073709551615 in pyproject.toml cannot be incremented"
        );
    }

    #[test]
    fn readme_not_found_displays_path() {
        let err = UpkeepError::ReadmeNotFound {
            path: PathBuf::from("README.md"),
        };
        assert_eq!(err.to_string(), "README.md not found");
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: UpkeepError = io_err.into();
        assert!(matches!(err, UpkeepError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: UpkeepError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
