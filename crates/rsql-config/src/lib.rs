//! Configuration for rsql parsers.
//!
//! A TOML document describes a parser declaratively: which dialect to render, how keys are
//! normalized, which keys are accepted, and extra operator tokens that alias built-in ones.
//!
//! ```toml
//! [parser]
//! dialect = "mysql"
//! max_depth = 16
//! key_transforms = ["snake_case"]
//!
//! [keys]
//! allowed = ["user_name", "age"]
//!
//! [[operator]]
//! pattern = "=eq="
//! alias = "=="
//! ```

#![warn(missing_docs)]

mod error;
mod parse;
mod transform;
mod validate;

use std::path::Path;

pub use error::ConfigError;
pub use parse::{parse_config_file, parse_config_str};
use rsql_query::{DEFAULT_MAX_DEPTH, Dialect, Parser, ProcessOptions};
use serde::{Deserialize, Serialize};
pub use transform::KeyTransform;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level rsql configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Parser settings.
    pub parser: ParserSettings,
    /// Key validation settings.
    pub keys: KeySettings,
    /// Extra operator tokens, consulted before the dialect's own in file order.
    #[serde(rename = "operator", skip_serializing_if = "Vec::is_empty")]
    pub operators: Vec<OperatorAlias>,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        parse_config_file(path)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        parse_config_str(contents, Path::new("<inline>"))
    }

    /// Builds a frozen parser from this configuration.
    ///
    /// Validation warnings are logged, not returned; call [`Config::validate`] to inspect them.
    pub fn build_parser(&self) -> Result<Parser, ConfigError> {
        for warning in self.validate() {
            log::warn!("rsql config: {warning}");
        }

        let dialect = self.parser.dialect.dialect();
        let mut builder = Parser::builder(dialect.clone()).with_max_depth(self.parser.max_depth);

        for op in &self.operators {
            let target =
                dialect
                    .operator(&op.alias)
                    .ok_or_else(|| ConfigError::UnknownOperatorAlias {
                        pattern: op.pattern.clone(),
                        alias: op.alias.clone(),
                    })?;
            let spec = target
                .alias(op.pattern.as_str())
                .map_err(|source| ConfigError::InvalidOperator {
                    pattern: op.pattern.clone(),
                    source,
                })?;
            builder = builder.with_operator(spec);
        }

        for &transform in &self.parser.key_transforms {
            builder = builder.with_key_transformer(move |key: &str| transform.apply(key));
        }

        log::debug!(
            "built {:?} parser with {} operator aliases and {} key transforms",
            self.parser.dialect,
            self.operators.len(),
            self.parser.key_transforms.len()
        );
        Ok(builder.build())
    }

    /// Returns the key validation options.
    pub fn process_options(&self) -> ProcessOptions {
        let mut options = ProcessOptions::new();
        if let Some(allowed) = &self.keys.allowed {
            options = options.with_allowed_keys(allowed.iter().cloned());
        }
        if let Some(forbidden) = &self.keys.forbidden {
            options = options.with_forbidden_keys(forbidden.iter().cloned());
        }
        options
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - Keys that are both allowed and forbidden
    /// - An empty allow-list
    /// - Aliases that shadow built-in operators
    /// - Grouping disabled by `max_depth = 0`
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|source| ConfigError::SerializeToml { source })
    }
}

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Backend to render.
    pub dialect: DialectName,
    /// Maximum grouping depth.
    pub max_depth: usize,
    /// Key transforms, applied in order.
    pub key_transforms: Vec<KeyTransform>,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            dialect: DialectName::Mongo,
            max_depth: DEFAULT_MAX_DEPTH,
            key_transforms: Vec::new(),
        }
    }
}

/// The built-in dialects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectName {
    /// MongoDB filter documents.
    #[default]
    Mongo,
    /// SQL `WHERE` fragments.
    Mysql,
}

impl DialectName {
    /// Builds a fresh dialect.
    pub fn dialect(self) -> Dialect {
        match self {
            Self::Mongo => Dialect::mongo(),
            Self::Mysql => Dialect::mysql(),
        }
    }
}

/// Key validation settings. Checked after key transforms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeySettings {
    /// If set, only these keys are accepted.
    pub allowed: Option<Vec<String>>,
    /// If set, these keys are rejected.
    pub forbidden: Option<Vec<String>>,
}

/// An extra operator token that renders like an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OperatorAlias {
    /// The new token, e.g. `=eq=`.
    pub pattern: String,
    /// The dialect operator it renders as, e.g. `==`.
    pub alias: String,
}
