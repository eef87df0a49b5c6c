//! Configuration construction and fail-fast input validation.
//!
//! The whole crate hinges on one required input: the path to the project's
//! `tsconfig.json`, conventionally supplied through the
//! [`ESLINT_PATH_TSCONFIG`] environment variable. Validation is a pure
//! function of that value ([`validate_tsconfig_path`]); the process
//! environment is only touched at the edge, in [`tsconfig_from_env`].
//!
//! [`base_config`] splices the validated path (and its parent directory)
//! into the literal payload defined in [`super::schema`]. No configuration
//! value ever exists for an invalid input.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{ConfigGenError, Result};

use super::schema::{
    EnvFlags, EslintConfig, ImportParsers, ImportResolver, JsdocSettings, NodeResolver,
    OverrideBlock, ParserOptions, ResolutionSettings, Rules, TypescriptResolver, EXTENDS, PLUGINS,
    SOURCE_EXTENSIONS, TS_PARSER,
};

/// Environment variable carrying the tsconfig path.
pub const ESLINT_PATH_TSCONFIG: &str = "ESLINT_PATH_TSCONFIG";

/// Validate a raw tsconfig path value.
///
/// Accepts the value as it would come out of the process environment:
/// absent, present but empty, or present but not valid UTF-8 all fail with
/// [`ConfigGenError::TsconfigPathInvalid`]. Whether the file exists is
/// deliberately not checked here; that is ESLint's concern when it consumes
/// the configuration.
pub fn validate_tsconfig_path(value: Option<&OsStr>) -> Result<PathBuf> {
    let value = value.ok_or(ConfigGenError::TsconfigPathInvalid)?;
    let value = value
        .to_str()
        .ok_or(ConfigGenError::TsconfigPathInvalid)?;
    if value.is_empty() {
        return Err(ConfigGenError::TsconfigPathInvalid);
    }
    Ok(PathBuf::from(value))
}

/// Read and validate [`ESLINT_PATH_TSCONFIG`] from the process environment.
pub fn tsconfig_from_env() -> Result<PathBuf> {
    validate_tsconfig_path(std::env::var_os(ESLINT_PATH_TSCONFIG).as_deref())
}

/// Directory containing the tsconfig, for rooting the TypeScript resolver.
///
/// A bare filename has no parent component; it maps to `.`, matching
/// Node's `dirname`.
fn project_dir(tsconfig: &Path) -> PathBuf {
    match tsconfig.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Build the shared ESLint configuration for the given tsconfig path.
///
/// The path is validated again here so the invariant holds for direct
/// library callers too: an [`EslintConfig`] can only be observed for a
/// non-empty path. Two calls with the same path yield equal values.
pub fn base_config(tsconfig: &Path) -> Result<EslintConfig> {
    let tsconfig = validate_tsconfig_path(Some(tsconfig.as_os_str()))?;
    let root = project_dir(&tsconfig);
    tracing::debug!(
        tsconfig = %tsconfig.display(),
        root = %root.display(),
        "building eslint configuration"
    );

    Ok(EslintConfig {
        env: EnvFlags::default(),
        parser: TS_PARSER.to_string(),
        parser_options: ParserOptions::new(tsconfig),
        plugins: PLUGINS.iter().map(ToString::to_string).collect(),
        extends: EXTENDS.iter().map(ToString::to_string).collect(),
        rules: Rules::default(),
        overrides: vec![OverrideBlock::plain_js()],
        settings: ResolutionSettings {
            import_extensions: SOURCE_EXTENSIONS.iter().map(ToString::to_string).collect(),
            import_resolver: ImportResolver {
                node: NodeResolver::default(),
                typescript: TypescriptResolver::new(root),
            },
            import_parsers: ImportParsers::default(),
            jsdoc: JsdocSettings::default(),
        },
    })
}

impl EslintConfig {
    /// Build the configuration from [`ESLINT_PATH_TSCONFIG`].
    pub fn from_env() -> Result<Self> {
        base_config(&tsconfig_from_env()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Severity;

    #[test]
    fn missing_value_fails() {
        let err = validate_tsconfig_path(None).unwrap_err();
        assert!(matches!(err, ConfigGenError::TsconfigPathInvalid));
    }

    #[test]
    fn empty_value_fails() {
        let err = validate_tsconfig_path(Some(OsStr::new(""))).unwrap_err();
        assert!(matches!(err, ConfigGenError::TsconfigPathInvalid));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_value_fails() {
        use std::os::unix::ffi::OsStringExt;
        let raw = std::ffi::OsString::from_vec(vec![0x66, 0x6f, 0xff]);
        let err = validate_tsconfig_path(Some(&raw)).unwrap_err();
        assert!(matches!(err, ConfigGenError::TsconfigPathInvalid));
    }

    #[test]
    fn valid_value_passes_through_verbatim() {
        let path = validate_tsconfig_path(Some(OsStr::new("/repo/tsconfig.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/repo/tsconfig.json"));
    }

    #[test]
    fn project_and_root_are_derived_from_the_input() {
        let config = base_config(Path::new("/repo/tsconfig.json")).unwrap();
        assert_eq!(
            config.parser_options.project,
            PathBuf::from("/repo/tsconfig.json")
        );
        assert_eq!(
            config.settings.import_resolver.typescript.project,
            PathBuf::from("/repo")
        );
    }

    #[test]
    fn bare_filename_roots_the_resolver_at_dot() {
        let config = base_config(Path::new("tsconfig.json")).unwrap();
        assert_eq!(
            config.settings.import_resolver.typescript.project,
            PathBuf::from(".")
        );
    }

    #[test]
    fn nested_tsconfig_keeps_its_directory() {
        let config = base_config(Path::new("/repo/packages/app/tsconfig.build.json")).unwrap();
        assert_eq!(
            config.settings.import_resolver.typescript.project,
            PathBuf::from("/repo/packages/app")
        );
    }

    #[test]
    fn empty_path_never_yields_a_config() {
        assert!(base_config(Path::new("")).is_err());
    }

    #[test]
    fn construction_is_deterministic() {
        let a = base_config(Path::new("/repo/tsconfig.json")).unwrap();
        let b = base_config(Path::new("/repo/tsconfig.json")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_payload_does_not_depend_on_the_path() {
        let a = base_config(Path::new("/repo/tsconfig.json")).unwrap();
        let b = base_config(Path::new("/elsewhere/tsconfig.json")).unwrap();
        assert_eq!(a.env, b.env);
        assert_eq!(a.parser, b.parser);
        assert_eq!(a.plugins, b.plugins);
        assert_eq!(a.extends, b.extends);
        assert_eq!(a.rules, b.rules);
        assert_eq!(a.overrides, b.overrides);
        assert_eq!(a.settings.import_extensions, b.settings.import_extensions);
        assert_eq!(a.settings.import_parsers, b.settings.import_parsers);
        assert_eq!(a.settings.jsdoc, b.settings.jsdoc);
    }

    #[test]
    fn baseline_rules_match_the_shared_policy() {
        let config = base_config(Path::new("/repo/tsconfig.json")).unwrap();
        assert_eq!(config.rules.no_console, Severity::Error);
        assert_eq!(config.rules.explicit_function_return_type, Severity::Off);
        assert_eq!(config.rules.no_require_imports, Severity::Error);
        assert_eq!(config.parser, TS_PARSER);
        assert_eq!(config.extends.len(), 8);
        assert_eq!(config.plugins.len(), 3);
        assert_eq!(config.overrides.len(), 1);
    }
}
