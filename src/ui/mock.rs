//! Mock UI implementation for testing.
//!
//! `MockUI` implements [`UserInterface`] and records every line so tests
//! can assert on what a command reported.

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain messages shown.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Success messages shown.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Warnings shown.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Errors shown.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether any recorded line contains `needle`.
    pub fn has_output(&self, needle: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .any(|line| line.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_kind() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");

        assert_eq!(ui.messages(), &["m".to_string()]);
        assert_eq!(ui.successes(), &["s".to_string()]);
        assert_eq!(ui.warnings(), &["w".to_string()]);
        assert_eq!(ui.errors(), &["e".to_string()]);
        assert!(ui.has_output("w"));
    }
}
