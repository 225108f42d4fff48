//! Error types for rsql configuration.

use std::io;
use std::path::PathBuf;

use rsql_query::QueryError;
use thiserror::Error;
use toml::{de, ser};

/// Errors that can occur when loading configuration or building a parser from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// Failed to serialize configuration back to TOML.
    #[error("failed to serialize config: {source}")]
    SerializeToml {
        /// Underlying TOML serialization error.
        source: ser::Error,
    },

    /// An operator alias names an operator the dialect does not have.
    #[error("operator '{pattern}' aliases unknown operator '{alias}'")]
    UnknownOperatorAlias {
        /// The alias being registered.
        pattern: String,
        /// The missing target operator.
        alias: String,
    },

    /// An operator alias could not be registered.
    #[error("invalid operator '{pattern}': {source}")]
    InvalidOperator {
        /// The rejected pattern.
        pattern: String,
        /// Why the parser rejected it.
        source: QueryError,
    },
}
