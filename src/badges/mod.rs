//! Badge selection and README reconciliation.
//!
//! - [`catalog`] - the ordered table of badge rules
//! - [`badge`] - a rendered badge and its identity markers
//! - [`readme`] - merging badges into a README without duplicates

pub mod badge;
pub mod catalog;
pub mod readme;

pub use badge::{Badge, BadgeCategory};
pub use catalog::{applicable_badges, BadgeRule, CATALOG};
pub use readme::{reconcile, ReconcileOptions, Reconciliation};
