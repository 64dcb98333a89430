//! Repository detection.
//!
//! Each detector is a small predicate over a [`Probe`](crate::probe::Probe).
//! Detectors fail closed: unreadable files, malformed documents and network
//! errors all read as "feature absent".

pub mod context;
pub mod manifest;
pub mod repository;

pub use context::{RepoContext, KNOWN_WORKFLOWS};
