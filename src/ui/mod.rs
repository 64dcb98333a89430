//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested without a terminal
//! - [`TerminalUI`] writing styled lines to stdout/stderr
//! - [`MockUI`] capturing output for assertions
//!
//! Diagnostics go through `tracing`; this trait is only for the handful of
//! lines a CI log reader is meant to see.
//!
//! # Example
//!
//! ```
//! use upkeep::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Added 2 badges.");
//! assert_eq!(ui.successes(), &["Added 2 badges.".to_string()]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, UpkeepTheme};

/// Trait for user interface interactions.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);
}
