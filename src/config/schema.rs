//! ESLint configuration schema definitions.
//!
//! This module contains the struct definitions that map, key for key, to the
//! `.eslintrc` format consumed by ESLint. Every object in the emitted
//! configuration has a named struct here; serde renames reproduce ESLint's
//! exact key spelling (`parserOptions`, `import/resolver`,
//! `@typescript-eslint/no-require-imports`, and so on), so the shape of the
//! output is fixed at compile time rather than assembled from freeform maps.
//!
//! Only two fields vary at all: [`ParserOptions::project`] and
//! [`TypescriptResolver::project`]. Both are derived from the tsconfig path
//! by [`crate::config::base_config`]; everything else is literal.

use schemars::JsonSchema;
use serde::Serialize;
use std::path::PathBuf;

/// Parser used for typed TypeScript sources.
pub const TS_PARSER: &str = "@typescript-eslint/parser";

/// ECMAScript language version the parser targets.
pub const ECMA_VERSION: u32 = 2020;

/// Plugins the configuration activates.
pub const PLUGINS: [&str; 3] = ["@typescript-eslint", "jsdoc", "import"];

/// Shared rule sets the configuration extends, in application order.
pub const EXTENDS: [&str; 8] = [
    "eslint:recommended",
    "plugin:@typescript-eslint/recommended",
    "plugin:@typescript-eslint/recommended-requiring-type-checking",
    "plugin:import/errors",
    "plugin:import/warnings",
    "plugin:import/typescript",
    "plugin:jsdoc/recommended",
    "plugin:prettier/recommended",
];

/// File extensions the import plugin should recognize.
pub const SOURCE_EXTENSIONS: [&str; 2] = [".js", ".ts"];

/// Extensions handed to the TypeScript parser.
pub const TS_EXTENSIONS: [&str; 1] = [".ts"];

/// Glob patterns matching plain-JavaScript sources.
pub const JS_FILE_PATTERNS: [&str; 2] = ["*.js", "**/*.js"];

/// Root configuration structure, mirroring `.eslintrc.json`.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct EslintConfig {
    /// Language environments to enable.
    pub env: EnvFlags,

    /// Parser identifier ([`TS_PARSER`]).
    pub parser: String,

    /// Parser options, including the tsconfig path for typed linting.
    #[serde(rename = "parserOptions")]
    pub parser_options: ParserOptions,

    /// Activated plugin identifiers.
    pub plugins: Vec<String>,

    /// Extended shared rule sets.
    pub extends: Vec<String>,

    /// Rule overrides on top of the extended sets.
    pub rules: Rules,

    /// Per-file-pattern rule relaxations.
    pub overrides: Vec<OverrideBlock>,

    /// Import resolution and JSDoc settings.
    pub settings: ResolutionSettings,
}

/// Language environment flags (the `env` key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct EnvFlags {
    /// Enable ES6 globals and syntax.
    pub es6: bool,
}

impl Default for EnvFlags {
    fn default() -> Self {
        Self { es6: true }
    }
}

/// Options passed to the TypeScript parser.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ParserOptions {
    /// ECMAScript version to parse.
    #[serde(rename = "ecmaVersion")]
    pub ecma_version: u32,

    /// Path to the tsconfig used for type-aware rules. Derived from the
    /// required input, never defaulted.
    pub project: PathBuf,

    /// Module system of the sources.
    #[serde(rename = "sourceType")]
    pub source_type: SourceType,
}

impl ParserOptions {
    /// Parser options for the given tsconfig path.
    pub fn new(project: PathBuf) -> Self {
        Self {
            ecma_version: ECMA_VERSION,
            project,
            source_type: SourceType::Module,
        }
    }
}

/// Source module type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// ES modules (`import`/`export`).
    Module,
    /// Classic scripts.
    Script,
}

/// Rule severity keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule disabled.
    Off,
    /// Violations reported without failing the run.
    Warn,
    /// Violations fail the run.
    Error,
}

/// Hyphen placement accepted before JSDoc parameter descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HyphenPlacement {
    /// A hyphen is required.
    Always,
    /// A hyphen is rejected.
    Never,
}

/// Options for `jsdoc/require-returns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct RequireReturnsOptions {
    /// Whether getters need an `@returns` tag.
    #[serde(rename = "checkGetters")]
    pub check_getters: bool,
}

/// Rule overrides applied on top of the extended rule sets.
///
/// JSDoc *type* rules are off across the board: TypeScript owns the types,
/// the doc comments should not repeat them.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Rules {
    /// Console calls do not belong in library code.
    #[serde(rename = "no-console")]
    pub no_console: Severity,

    /// Too coarse for arrow functions; return types stay optional for now.
    #[serde(rename = "@typescript-eslint/explicit-function-return-type")]
    pub explicit_function_return_type: Severity,

    /// Typed sources go through a transpiler, so `import` syntax is required.
    #[serde(rename = "@typescript-eslint/no-require-imports")]
    pub no_require_imports: Severity,

    #[serde(rename = "jsdoc/no-types")]
    pub jsdoc_no_types: Severity,

    #[serde(rename = "jsdoc/require-param-type")]
    pub jsdoc_require_param_type: Severity,

    /// Getters are exempt from `@returns`.
    #[serde(rename = "jsdoc/require-returns")]
    pub jsdoc_require_returns: (Severity, RequireReturnsOptions),

    #[serde(rename = "jsdoc/require-returns-type")]
    pub jsdoc_require_returns_type: Severity,

    #[serde(rename = "jsdoc/no-undefined-types")]
    pub jsdoc_no_undefined_types: Severity,

    #[serde(rename = "jsdoc/check-indentation")]
    pub jsdoc_check_indentation: [Severity; 1],

    #[serde(rename = "jsdoc/require-description")]
    pub jsdoc_require_description: [Severity; 1],

    #[serde(rename = "jsdoc/require-description-complete-sentence")]
    pub jsdoc_require_description_complete_sentence: [Severity; 1],

    /// Parameter descriptions read as `@param foo - does things`.
    #[serde(rename = "jsdoc/require-hyphen-before-param-description")]
    pub jsdoc_require_hyphen_before_param_description: (Severity, HyphenPlacement),
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            no_console: Severity::Error,
            explicit_function_return_type: Severity::Off,
            no_require_imports: Severity::Error,
            jsdoc_no_types: Severity::Warn,
            jsdoc_require_param_type: Severity::Off,
            jsdoc_require_returns: (Severity::Warn, RequireReturnsOptions { check_getters: false }),
            jsdoc_require_returns_type: Severity::Off,
            jsdoc_no_undefined_types: Severity::Off,
            jsdoc_check_indentation: [Severity::Warn],
            jsdoc_require_description: [Severity::Warn],
            jsdoc_require_description_complete_sentence: [Severity::Warn],
            jsdoc_require_hyphen_before_param_description: (Severity::Warn, HyphenPlacement::Always),
        }
    }
}

/// Rule relaxations scoped to files matching a glob pattern.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct OverrideBlock {
    /// Glob patterns the block applies to.
    pub files: Vec<String>,

    /// Rules relaxed for matching files.
    pub rules: JsOverrideRules,
}

impl OverrideBlock {
    /// The block for plain `.js` files. Those run through Node untranspiled,
    /// so `require` must stay permitted; `.ts` sources get a transpiler and
    /// keep the strict rules.
    pub fn plain_js() -> Self {
        Self {
            files: JS_FILE_PATTERNS.iter().map(ToString::to_string).collect(),
            rules: JsOverrideRules::default(),
        }
    }
}

/// Rules turned off for untranspiled JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct JsOverrideRules {
    #[serde(rename = "@typescript-eslint/no-require-imports")]
    pub no_require_imports: Severity,

    #[serde(rename = "@typescript-eslint/no-var-requires")]
    pub no_var_requires: Severity,

    /// `require` statements trigger this rule spuriously.
    #[serde(rename = "@typescript-eslint/unbound-method")]
    pub unbound_method: Severity,
}

impl Default for JsOverrideRules {
    fn default() -> Self {
        Self {
            no_require_imports: Severity::Off,
            no_var_requires: Severity::Off,
            unbound_method: Severity::Off,
        }
    }
}

/// The `settings` block: import resolution and JSDoc behavior.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ResolutionSettings {
    /// Extensions the import plugin treats as source files.
    #[serde(rename = "import/extensions")]
    pub import_extensions: Vec<String>,

    /// Module resolution strategies.
    #[serde(rename = "import/resolver")]
    pub import_resolver: ImportResolver,

    /// Parser assignments per extension.
    #[serde(rename = "import/parsers")]
    pub import_parsers: ImportParsers,

    /// JSDoc plugin settings.
    pub jsdoc: JsdocSettings,
}

/// Module resolution strategies consulted in order.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ImportResolver {
    /// Node-style resolution.
    pub node: NodeResolver,

    /// TypeScript-aware resolution rooted at the tsconfig's directory.
    pub typescript: TypescriptResolver,
}

/// Node-style resolver settings.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct NodeResolver {
    /// Extensions tried during resolution.
    pub extensions: Vec<String>,
}

impl Default for NodeResolver {
    fn default() -> Self {
        Self {
            extensions: SOURCE_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// TypeScript-aware resolver settings.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct TypescriptResolver {
    /// Fall back to `@types` packages when a module ships no types.
    #[serde(rename = "alwaysTryTypes")]
    pub always_try_types: bool,

    /// Directory containing the tsconfig. Derived from the required input.
    pub project: PathBuf,
}

impl TypescriptResolver {
    /// Resolver rooted at the given directory.
    pub fn new(project: PathBuf) -> Self {
        Self {
            always_try_types: true,
            project,
        }
    }
}

/// Parser assignments for the import plugin.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ImportParsers {
    /// Extensions routed to the TypeScript parser.
    #[serde(rename = "@typescript-eslint/parser")]
    pub typescript_parser: Vec<String>,
}

impl Default for ImportParsers {
    fn default() -> Self {
        Self {
            typescript_parser: TS_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// JSDoc plugin settings.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct JsdocSettings {
    /// Comment dialect the plugin should assume.
    pub mode: JsdocMode,
}

impl Default for JsdocSettings {
    fn default() -> Self {
        Self {
            mode: JsdocMode::Typescript,
        }
    }
}

/// JSDoc comment dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum JsdocMode {
    /// TypeScript-flavored JSDoc.
    Typescript,
    /// Closure Compiler annotations.
    Closure,
    /// Plain JSDoc.
    Jsdoc,
}
