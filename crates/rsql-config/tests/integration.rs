//! Integration tests for rsql-config.
//!
//! Tests the full pipeline: TOML file -> config -> parser -> rendered query.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::PathBuf};

use rsql_config::{Config, ConfigError, ConfigWarning};
use rsql_query::QueryError;

/// Test helper holding a temporary directory for config files.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Writes a config file and returns its path.
    fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("rsql.toml");
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_and_process_sql() {
    let env = TestEnv::new();
    let path = env.write_config(
        r#"
[parser]
dialect = "mysql"
key_transforms = ["snake_case"]

[keys]
allowed = ["user_name", "age"]
"#,
    );

    let config = Config::load(&path).unwrap();
    let parser = config.build_parser().unwrap();
    let options = config.process_options();

    assert_eq!(
        parser
            .process("userName==bob;age=ge=18", &options)
            .unwrap(),
        "(user_name = bob AND age >= 18)"
    );
    assert_eq!(
        parser.process("email==x", &options).unwrap_err(),
        QueryError::KeyNotAllowed {
            key: "email".into()
        }
    );
}

#[test]
fn test_load_mongo_with_alias_and_forbidden_key() {
    let env = TestEnv::new();
    let path = env.write_config(
        r#"
[keys]
forbidden = ["password"]

[[operator]]
pattern = "=eq="
alias = "=="
"#,
    );

    let config = Config::load(&path).unwrap();
    let parser = config.build_parser().unwrap();
    let options = config.process_options();

    assert_eq!(
        parser.process("a=eq=1,b==2", &options).unwrap(),
        r#"{"$or":[{"a":1},{"b":2}]}"#
    );
    assert!(matches!(
        parser.process("password==x", &options),
        Err(QueryError::KeyForbidden { .. })
    ));
}

#[test]
fn test_max_depth_from_config() {
    let config = Config::from_toml_str("[parser]\nmax_depth = 1\n").unwrap();
    let parser = config.build_parser().unwrap();
    let options = config.process_options();

    assert!(parser.process("(a==1,b==2);c==3", &options).is_ok());
    assert!(matches!(
        parser.process("((a==1,b==2);c==3),d==4", &options),
        Err(QueryError::TooDeep { max_depth: 1 })
    ));
}

#[test]
fn test_invalid_file_reports_path() {
    let env = TestEnv::new();
    let path = env.write_config("[parser\n");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
    assert!(err.to_string().contains("rsql.toml"));
}

#[test]
fn test_warnings_do_not_block_build() {
    let config = Config::from_toml_str(
        r#"
[keys]
allowed = ["a"]
forbidden = ["a"]
"#,
    )
    .unwrap();

    assert_eq!(
        config.validate(),
        vec![ConfigWarning::KeyAllowedAndForbidden { key: "a".into() }]
    );
    let parser = config.build_parser().unwrap();
    assert!(matches!(
        parser.process("a==1", &config.process_options()),
        Err(QueryError::KeyForbidden { .. })
    ));
}
