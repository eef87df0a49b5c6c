//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use eslint_config_gen::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.status("resolving tsconfig"); // suppressed in quiet mode
//! ui.message("{ ... }"); // the artifact is always emitted
//! ```

pub mod mock;
pub mod output;
pub mod terminal;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};

/// Trait for terminal output.
///
/// Commands write through this trait so tests can capture what was printed.
/// [`UserInterface::message`] carries the command's artifact and is always
/// emitted; [`UserInterface::status`] is progress chatter and respects the
/// output mode.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Emit primary output (the generated artifact).
    fn message(&mut self, msg: &str);

    /// Emit a status line, suppressed in quiet mode.
    fn status(&mut self, msg: &str);

    /// Emit a success message.
    fn success(&mut self, msg: &str);

    /// Emit a warning message.
    fn warning(&mut self, msg: &str);

    /// Emit an error message.
    fn error(&mut self, msg: &str);

    /// Check if stdout is attached to a terminal.
    fn is_interactive(&self) -> bool;
}
