//! Mock UI for tests.

use super::{OutputMode, UserInterface};

/// Recording UI implementation for unit tests.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    statuses: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new mock UI in normal mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock UI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// All recorded primary messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All recorded status lines.
    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    /// All recorded success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// All recorded warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// All recorded errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn status(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.statuses.push(msg.to_string());
        }
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

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_records_messages() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.error("boom");
        assert_eq!(ui.messages(), ["hello"]);
        assert_eq!(ui.errors(), ["boom"]);
    }

    #[test]
    fn quiet_mode_drops_status_lines() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.status("working");
        assert!(ui.statuses().is_empty());
    }

    #[test]
    fn mock_is_never_interactive() {
        let ui = MockUI::new();
        assert!(!ui.is_interactive());
    }
}
