//! Named key transformers.

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

/// A key transformer that can be named in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyTransform {
    /// `UserName` → `username`
    Lowercase,
    /// `userName` → `USERNAME`
    Uppercase,
    /// `userName` → `user_name`
    SnakeCase,
    /// `user_name` → `userName`
    CamelCase,
    /// `user_name` → `UserName`
    PascalCase,
    /// `userName` → `user-name`
    KebabCase,
}

impl KeyTransform {
    /// Applies the transform to `key`.
    pub fn apply(self, key: &str) -> String {
        match self {
            Self::Lowercase => key.to_lowercase(),
            Self::Uppercase => key.to_uppercase(),
            Self::SnakeCase => key.to_case(Case::Snake),
            Self::CamelCase => key.to_case(Case::Camel),
            Self::PascalCase => key.to_case(Case::Pascal),
            Self::KebabCase => key.to_case(Case::Kebab),
        }
    }
}
