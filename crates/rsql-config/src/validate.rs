//! Configuration validation.
//!
//! Reports settings that are legal but probably not what was meant.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key appears in both the allow-list and the forbid-list, so it is always rejected.
    KeyAllowedAndForbidden {
        /// The key.
        key: String,
    },
    /// The allow-list is present but empty, so every query is rejected.
    EmptyAllowList,
    /// An alias reuses a built-in token and replaces its rendering.
    AliasShadowsBuiltin {
        /// The shadowed token.
        pattern: String,
    },
    /// `max_depth = 0`: any grouping parenthesis is rejected.
    GroupingDisabled,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyAllowedAndForbidden { key } => {
                write!(f, "key '{key}' is both allowed and forbidden")
            }
            Self::EmptyAllowList => write!(f, "allow-list is empty, every key will be rejected"),
            Self::AliasShadowsBuiltin { pattern } => {
                write!(f, "operator '{pattern}' shadows a built-in operator")
            }
            Self::GroupingDisabled => {
                write!(f, "max_depth is 0, grouping parentheses are disabled")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if let Some(allowed) = &config.keys.allowed {
        if allowed.is_empty() {
            warnings.push(ConfigWarning::EmptyAllowList);
        }
        let forbidden = config.keys.forbidden.as_deref().unwrap_or_default();
        warnings.extend(
            allowed
                .iter()
                .filter(|key| forbidden.contains(*key))
                .map(|key| ConfigWarning::KeyAllowedAndForbidden { key: key.clone() }),
        );
    }

    let dialect = config.parser.dialect.dialect();
    warnings.extend(
        config
            .operators
            .iter()
            .filter(|op| dialect.operator(&op.pattern).is_some())
            .map(|op| ConfigWarning::AliasShadowsBuiltin {
                pattern: op.pattern.clone(),
            }),
    );

    if config.parser.max_depth == 0 {
        warnings.push(ConfigWarning::GroupingDisabled);
    }

    warnings
}
