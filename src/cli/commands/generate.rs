//! Generate command implementation.
//!
//! The `eslint-config-gen generate` command builds the configuration and
//! renders it as `.eslintrc.json` (default) or `.eslintrc.yml` (`--yaml`),
//! to stdout or to a file (`--output`).

use std::ffi::OsStr;

use crate::cli::args::GenerateArgs;
use crate::config::{base_config, tsconfig_from_env, validate_tsconfig_path, EslintConfig};
use crate::error::{ConfigGenError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The generate command implementation.
pub struct GenerateCommand {
    args: GenerateArgs,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(args: GenerateArgs) -> Self {
        Self { args }
    }

    /// Whether to emit YAML: the explicit flag, or an `--output` path with
    /// a YAML extension.
    fn wants_yaml(&self) -> bool {
        self.args.yaml || self.args.output.as_deref().is_some_and(looks_like_yaml)
    }

    /// Render the configuration in the requested format, without a trailing
    /// newline.
    fn render(&self, config: &EslintConfig) -> Result<String> {
        let rendered = if self.wants_yaml() {
            serde_yaml::to_string(config).map_err(|e| ConfigGenError::Other(e.into()))?
        } else {
            serde_json::to_string_pretty(config).map_err(|e| ConfigGenError::Other(e.into()))?
        };
        Ok(rendered.trim_end().to_string())
    }
}

impl Command for GenerateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // The flag wins; otherwise the environment supplies the path. Both
        // routes go through the same validation and its fixed message.
        let tsconfig = match &self.args.tsconfig {
            Some(path) => validate_tsconfig_path(Some(path.as_os_str()))?,
            None => tsconfig_from_env()?,
        };
        ui.status(&format!("tsconfig: {}", tsconfig.display()));
        if !tsconfig.exists() {
            // Existence is ESLint's concern at consumption time, so this is
            // a hint rather than a failure.
            ui.warning(&format!(
                "Warning: {} does not exist yet",
                tsconfig.display()
            ));
        }

        let config = base_config(&tsconfig)?;
        let rendered = self.render(&config)?;

        match &self.args.output {
            Some(path) => {
                std::fs::write(path, format!("{}\n", rendered))?;
                tracing::debug!(path = %path.display(), "wrote configuration");
                ui.success(&format!("Wrote {}", path.display()));
            }
            None => ui.message(&rendered),
        }

        Ok(CommandResult::success())
    }
}

/// Extension-based format guess for `--output` paths.
fn looks_like_yaml(path: &std::path::Path) -> bool {
    matches!(
        path.extension().and_then(OsStr::to_str),
        Some("yml") | Some("yaml")
    )
}
