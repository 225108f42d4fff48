//! Error types for RSQL parsing and rendering.
//!
//! Every error aborts the whole parse. Variants carry the offending fragment in its original
//! escaped spelling so callers can surface it directly (e.g. in an HTTP 400 body).

use thiserror::Error;

/// Errors produced while parsing, validating, or rendering an RSQL query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A closing parenthesis without a matching opening one, or an unclosed opening one.
    #[error("unbalanced parentheses at offset {position} in '{fragment}'")]
    UnbalancedParens {
        /// The fragment being scanned.
        fragment: String,
        /// Character offset within the fragment.
        position: usize,
    },

    /// Adjacent, leading, or trailing separators produced an empty term.
    #[error("empty term at offset {position} in '{fragment}'")]
    EmptyTerm {
        /// The fragment being split.
        fragment: String,
        /// Character offset within the fragment where the empty term starts.
        position: usize,
    },

    /// Parentheses that neither wrap the whole term nor follow an operator.
    #[error("malformed parentheses in '{term}'")]
    MalformedParens {
        /// The offending term.
        term: String,
    },

    /// The term contains no operator-shaped token.
    #[error("no operator found in '{term}'")]
    NoOperatorMatch {
        /// The offending term.
        term: String,
    },

    /// The operator starts the term, leaving no key.
    #[error("missing key before operator in '{term}'")]
    EmptyKey {
        /// The offending term.
        term: String,
    },

    /// The key contains an escaped delimiter; escapes are only legal in values.
    #[error("escaped character in key of '{term}'")]
    EscapedKey {
        /// The offending term.
        term: String,
    },

    /// An operator-shaped token that no registered operator matches.
    #[error("unknown operator '{operator}' in '{term}'")]
    UnknownOperator {
        /// The unrecognized token.
        operator: String,
        /// The term containing it. When raised while rendering a tree, the value is shown
        /// with escapes already resolved.
        term: String,
    },

    /// The key is not in the allow-list.
    #[error("key '{key}' is not allowed")]
    KeyNotAllowed {
        /// The key after transformation.
        key: String,
    },

    /// The key is in the forbid-list.
    #[error("key '{key}' is forbidden")]
    KeyForbidden {
        /// The key after transformation.
        key: String,
    },

    /// Grouping parentheses nest deeper than the configured limit.
    #[error("grouping nested deeper than {max_depth} levels")]
    TooDeep {
        /// The configured limit.
        max_depth: usize,
    },

    /// A custom operator pattern does not have the operator-token shape.
    #[error(
        "invalid operator pattern '{pattern}': must start with '!' or '=', end with '=', \
         and contain no other '=' or parentheses"
    )]
    InvalidOperatorPattern {
        /// The rejected pattern.
        pattern: String,
    },
}
