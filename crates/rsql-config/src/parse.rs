//! Configuration file parsing.

use std::{fs, path::Path};

use crate::{Config, ConfigError};

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use rsql_query::DEFAULT_MAX_DEPTH;

    use super::*;
    use crate::{DialectName, KeyTransform};

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[parser]
dialect = "mysql"
max_depth = 8
key_transforms = ["lowercase", "snake_case"]

[keys]
allowed = ["name", "age"]
forbidden = ["password"]

[[operator]]
pattern = "=eq="
alias = "=="

[[operator]]
pattern = "=any="
alias = "=in="
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.parser.dialect, DialectName::Mysql);
        assert_eq!(config.parser.max_depth, 8);
        assert_eq!(
            config.parser.key_transforms,
            vec![KeyTransform::Lowercase, KeyTransform::SnakeCase]
        );
        assert_eq!(
            config.keys.allowed,
            Some(vec!["name".to_string(), "age".to_string()])
        );
        assert_eq!(config.keys.forbidden, Some(vec!["password".to_string()]));
        assert_eq!(config.operators.len(), 2);
        assert_eq!(config.operators[1].pattern, "=any=");
        assert_eq!(config.operators[1].alias, "=in=");
    }

    #[test]
    fn test_parse_partial_parser_section_keeps_defaults() {
        let config = parse_config_str(
            "[parser]\ndialect = \"mysql\"\n",
            Path::new("test.toml"),
        )
        .unwrap();
        assert_eq!(config.parser.max_depth, DEFAULT_MAX_DEPTH);
        assert!(config.parser.key_transforms.is_empty());
    }

    #[test]
    fn test_parse_unknown_dialect_fails() {
        let err = parse_config_str("[parser]\ndialect = \"oracle\"\n", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_parse_unknown_transform_fails() {
        let result = parse_config_str(
            "[parser]\nkey_transforms = [\"reverse\"]\n",
            Path::new("test.toml"),
        );
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_config_file(Path::new("/nonexistent/rsql.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
