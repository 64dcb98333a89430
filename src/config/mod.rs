//! Run configuration.
//!
//! There is no configuration file: settings come from flags, falling back
//! to the variables GitHub Actions exports and then to fixed defaults.

pub mod settings;

pub use settings::{
    RepoSettings, RepoSlug, DEFAULT_API_URL, DEFAULT_BRANCH, DEFAULT_NAME, DEFAULT_OWNER,
};
