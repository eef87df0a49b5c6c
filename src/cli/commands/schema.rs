//! Schema command implementation.
//!
//! The `eslint-config-gen schema` command prints the JSON Schema describing
//! the generated configuration, for editor validation of checked-in
//! `.eslintrc.json` files.

use crate::cli::args::SchemaArgs;
use crate::config::EslintConfig;
use crate::error::{ConfigGenError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand {
    args: SchemaArgs,
}

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new(args: SchemaArgs) -> Self {
        Self { args }
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = schemars::schema_for!(EslintConfig);
        let json = if self.args.compact {
            serde_json::to_string(&schema)
        } else {
            serde_json::to_string_pretty(&schema)
        }
        .map_err(|e| ConfigGenError::Other(e.into()))?;

        ui.message(&json);
        Ok(CommandResult::success())
    }
}
