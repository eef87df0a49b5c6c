//! Terminal UI implementation.

use console::{style, Term};
use std::io::Write;

use super::{OutputMode, UserInterface};

/// Terminal UI writing to stdout/stderr.
///
/// Styling goes through [`console`], which already honors `NO_COLOR` and
/// non-tty output.
pub struct TerminalUI {
    out: Term,
    err: Term,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn status(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", style(msg).dim()).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", style(msg).green()).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", style(msg).yellow()).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", style(msg).red()).ok();
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term()
    }
}

/// Create a UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
