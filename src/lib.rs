//! eslint-config-gen - Shared TypeScript ESLint configuration as typed data.
//!
//! The shared lint policy for typed TypeScript projects is a fixed
//! configuration except for two fields, both derived from one required
//! input: the path to the project's `tsconfig.json` (the
//! `ESLINT_PATH_TSCONFIG` environment variable). This crate models that
//! configuration as statically shaped structs, validates the input with a
//! single fail-fast check, and renders `.eslintrc.json` / `.eslintrc.yml`
//! for ESLint to consume.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration schema, validation, and construction
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output abstraction
//!
//! # Example
//!
//! ```
//! use eslint_config_gen::config::base_config;
//! use std::path::Path;
//!
//! let config = base_config(Path::new("/repo/tsconfig.json")).unwrap();
//! assert_eq!(config.parser, "@typescript-eslint/parser");
//! assert_eq!(config.extends.len(), 8);
//!
//! // An empty path never produces a configuration.
//! assert!(base_config(Path::new("")).is_err());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use error::{ConfigGenError, Result};
