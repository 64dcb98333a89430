//! Upkeep - CI maintenance for small repositories.
//!
//! Two tools share this library:
//!
//! - `add-badges` detects which status badges apply to a checkout and
//!   merges the missing ones into the README
//! - `increment-version` bumps the `version = "X.Y.Z"` line of the manifest
//!
//! # Modules
//!
//! - [`badges`] - Badge table and README reconciliation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Run settings from flags and environment
//! - [`detection`] - Repository context detection
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Filesystem and network capabilities
//! - [`ui`] - User-facing output
//! - [`version`] - Version parsing and bumping
//!
//! # Example
//!
//! ```
//! use upkeep::badges::{applicable_badges, reconcile, ReconcileOptions};
//! use upkeep::config::RepoSlug;
//! use upkeep::detection::RepoContext;
//!
//! let mut context = RepoContext::new(RepoSlug::new("octo", "widgets"), "main");
//! context.version = Some("1.2.3".to_string());
//!
//! let badges = applicable_badges(&context);
//! let result = reconcile("# Widgets\n\nDoes things.\n", &badges, ReconcileOptions::default());
//! assert!(result.text.contains("img.shields.io/badge/version-1.2.3-blue"));
//!
//! // Reconciling again changes nothing.
//! let again = reconcile(&result.text, &badges, ReconcileOptions::default());
//! assert!(!again.changed());
//! ```

pub mod badges;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod probe;
pub mod ui;
pub mod version;

pub use error::{Result, UpkeepError};
