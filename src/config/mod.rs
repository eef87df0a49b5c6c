//! The shared ESLint configuration: its typed schema and its builder.
//!
//! - Schema definitions in [`schema`]: one struct per object in the emitted
//!   `.eslintrc`, with serde renames fixing ESLint's key spelling.
//! - Construction and input validation in [`builder`]: the tsconfig path is
//!   the single required input, and the two derived fields
//!   (`parserOptions.project`, the TypeScript resolver root) are computed
//!   from it.
//!
//! # Example
//!
//! ```
//! use eslint_config_gen::config::base_config;
//! use std::path::{Path, PathBuf};
//!
//! let config = base_config(Path::new("/repo/tsconfig.json")).unwrap();
//! assert_eq!(config.parser, "@typescript-eslint/parser");
//! assert_eq!(config.parser_options.project, PathBuf::from("/repo/tsconfig.json"));
//! assert_eq!(
//!     config.settings.import_resolver.typescript.project,
//!     PathBuf::from("/repo")
//! );
//! ```

pub mod builder;
pub mod schema;

// Builder re-exports
pub use builder::{
    base_config, tsconfig_from_env, validate_tsconfig_path, ESLINT_PATH_TSCONFIG,
};

// Schema re-exports
pub use schema::{
    EnvFlags, EslintConfig, HyphenPlacement, ImportParsers, ImportResolver, JsOverrideRules,
    JsdocMode, JsdocSettings, NodeResolver, OverrideBlock, ParserOptions, RequireReturnsOptions,
    ResolutionSettings, Rules, Severity, SourceType, TypescriptResolver, ECMA_VERSION, EXTENDS,
    JS_FILE_PATTERNS, PLUGINS, SOURCE_EXTENSIONS, TS_EXTENSIONS, TS_PARSER,
};
