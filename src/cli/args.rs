//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// eslint-config-gen - Shared TypeScript ESLint configuration generator.
#[derive(Debug, Parser)]
#[command(name = "eslint-config-gen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Only emit the generated output and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the ESLint configuration (default if no command specified)
    Generate(GenerateArgs),

    /// Print the JSON Schema of the generated configuration
    Schema(SchemaArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    /// Path to the tsconfig.json the configuration type-checks against
    /// (falls back to the ESLINT_PATH_TSCONFIG environment variable)
    //
    // The environment fallback is read by the command itself, not by clap's
    // `env` attribute: an empty value has to fail with the fixed validation
    // message, not a missing-value parse error.
    #[arg(long, value_name = "PATH")]
    pub tsconfig: Option<PathBuf>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit YAML (.eslintrc.yml) instead of JSON
    #[arg(long)]
    pub yaml: bool,
}

/// Arguments for the `schema` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SchemaArgs {
    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
