//! Integration tests for the config module public API.

use eslint_config_gen::config::{
    base_config, validate_tsconfig_path, EslintConfig, Severity, EXTENDS, PLUGINS,
};
use eslint_config_gen::ConfigGenError;
use serde_json::json;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[test]
fn public_api_is_accessible() {
    let _severity = Severity::Warn;
    let _plugins = PLUGINS;
    let _extends = EXTENDS;
    let _config: EslintConfig = base_config(Path::new("/repo/tsconfig.json")).unwrap();
}

#[test]
fn validation_rejects_missing_empty_and_accepts_paths() {
    assert!(matches!(
        validate_tsconfig_path(None),
        Err(ConfigGenError::TsconfigPathInvalid)
    ));
    assert!(matches!(
        validate_tsconfig_path(Some(OsStr::new(""))),
        Err(ConfigGenError::TsconfigPathInvalid)
    ));
    assert_eq!(
        validate_tsconfig_path(Some(OsStr::new("/repo/tsconfig.json"))).unwrap(),
        PathBuf::from("/repo/tsconfig.json")
    );
}

#[test]
fn validation_error_message_is_fixed() {
    let err = validate_tsconfig_path(None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "ESLINT_PATH_TSCONFIG must be set to a non-empty tsconfig.json path"
    );
}

#[test]
fn derived_fields_follow_the_input_path() {
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
fn two_constructions_serialize_identically() {
    let a = base_config(Path::new("/repo/tsconfig.json")).unwrap();
    let b = base_config(Path::new("/repo/tsconfig.json")).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

/// The emitted document, key for key. This is the de facto contract with
/// ESLint and the plugins; everything except the two `project` fields is
/// literal.
#[test]
fn serialized_configuration_matches_the_contract() {
    let config = base_config(Path::new("/repo/tsconfig.json")).unwrap();
    let value = serde_json::to_value(&config).unwrap();

    let expected = json!({
        "env": { "es6": true },
        "parser": "@typescript-eslint/parser",
        "parserOptions": {
            "ecmaVersion": 2020,
            "project": "/repo/tsconfig.json",
            "sourceType": "module"
        },
        "plugins": ["@typescript-eslint", "jsdoc", "import"],
        "extends": [
            "eslint:recommended",
            "plugin:@typescript-eslint/recommended",
            "plugin:@typescript-eslint/recommended-requiring-type-checking",
            "plugin:import/errors",
            "plugin:import/warnings",
            "plugin:import/typescript",
            "plugin:jsdoc/recommended",
            "plugin:prettier/recommended"
        ],
        "rules": {
            "no-console": "error",
            "@typescript-eslint/explicit-function-return-type": "off",
            "@typescript-eslint/no-require-imports": "error",
            "jsdoc/no-types": "warn",
            "jsdoc/require-param-type": "off",
            "jsdoc/require-returns": ["warn", { "checkGetters": false }],
            "jsdoc/require-returns-type": "off",
            "jsdoc/no-undefined-types": "off",
            "jsdoc/check-indentation": ["warn"],
            "jsdoc/require-description": ["warn"],
            "jsdoc/require-description-complete-sentence": ["warn"],
            "jsdoc/require-hyphen-before-param-description": ["warn", "always"]
        },
        "overrides": [
            {
                "files": ["*.js", "**/*.js"],
                "rules": {
                    "@typescript-eslint/no-require-imports": "off",
                    "@typescript-eslint/no-var-requires": "off",
                    "@typescript-eslint/unbound-method": "off"
                }
            }
        ],
        "settings": {
            "import/extensions": [".js", ".ts"],
            "import/resolver": {
                "node": { "extensions": [".js", ".ts"] },
                "typescript": { "alwaysTryTypes": true, "project": "/repo" }
            },
            "import/parsers": { "@typescript-eslint/parser": [".ts"] },
            "jsdoc": { "mode": "typescript" }
        }
    });

    assert_eq!(value, expected);
}

#[test]
fn fixed_payload_is_independent_of_the_path() {
    let a = serde_json::to_value(base_config(Path::new("/a/tsconfig.json")).unwrap()).unwrap();
    let b = serde_json::to_value(base_config(Path::new("/b/x/tsconfig.json")).unwrap()).unwrap();
    for key in ["env", "parser", "plugins", "extends", "rules", "overrides"] {
        assert_eq!(a[key], b[key], "key {key} should not vary with the path");
    }
    assert_eq!(
        a["settings"]["import/extensions"],
        b["settings"]["import/extensions"]
    );
    assert_eq!(
        a["settings"]["import/parsers"],
        b["settings"]["import/parsers"]
    );
    assert_eq!(a["settings"]["jsdoc"], b["settings"]["jsdoc"]);
    assert_ne!(a["parserOptions"]["project"], b["parserOptions"]["project"]);
}

#[test]
fn relative_paths_are_kept_verbatim() {
    let config = base_config(Path::new("packages/app/tsconfig.json")).unwrap();
    assert_eq!(
        config.parser_options.project,
        PathBuf::from("packages/app/tsconfig.json")
    );
    assert_eq!(
        config.settings.import_resolver.typescript.project,
        PathBuf::from("packages/app")
    );
}

#[test]
fn from_env_convenience_respects_the_validation() {
    // The process-wide environment is shared across the test binary, so
    // only exercise the guaranteed-absent case here; the positive path is
    // covered by the CLI tests in their own processes.
    std::env::remove_var("ESLINT_PATH_TSCONFIG");
    assert!(matches!(
        EslintConfig::from_env(),
        Err(ConfigGenError::TsconfigPathInvalid)
    ));
}
