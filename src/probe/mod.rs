//! Filesystem and network capabilities used by detection.
//!
//! Detection never touches the disk or the network directly. It goes
//! through the [`Probe`] trait so the same logic runs against the real
//! checkout ([`SystemProbe`]) or an in-memory fake ([`MockProbe`]).
//!
//! Paths are relative to the project root and use `/` separators.

pub mod mock;
pub mod system;

pub use mock::MockProbe;
pub use system::{SystemProbe, PROBE_TIMEOUT};

use anyhow::Result;
use serde_json::Value;

/// Read-only access to the repository checkout and the network.
pub trait Probe {
    /// Whether a file or directory exists.
    fn exists(&self, path: &str) -> bool;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &str) -> Result<String>;

    /// Names of the entries directly inside a directory.
    fn list_dir(&self, path: &str) -> Result<Vec<String>>;

    /// Send a HEAD request and return the status code.
    fn http_head(&self, url: &str) -> Result<u16>;

    /// GET a JSON document, optionally with a bearer token.
    fn http_get_json(&self, url: &str, token: Option<&str>) -> Result<Value>;
}
