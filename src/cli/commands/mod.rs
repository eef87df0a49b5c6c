//! Command implementations.

pub mod completions;
pub mod dispatcher;
pub mod generate;
pub mod schema;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
