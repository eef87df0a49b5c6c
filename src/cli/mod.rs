//! Command-line interface.
//!
//! Argument definitions live in [`args`]; the command implementations and
//! the dispatcher live in [`commands`].

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, GenerateArgs, SchemaArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
