//! MongoDB filter documents.
//!
//! Values are inserted verbatim: `a==1` renders `{"a":1}` and `a=="x"` renders `{"a":"x"}`.
//! Keys are JSON strings and are quoted as such.

use serde_json::Value;

use super::{Dialect, OperatorSpec};

/// Quotes `s` as a JSON string.
fn quote(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Renders `{"key":value}`.
fn equals(key: &str, value: &str) -> String {
    format!("{{{}:{value}}}", quote(key))
}

/// Renders a comparison that uses a Mongo query operator.
fn with_operator(key: &str, operator: &str, value: &str) -> String {
    format!("{{{}:{{{}:{value}}}}}", quote(key), quote(operator))
}

/// Renders a logical operator over `children`.
fn logical(operator: &str, children: &[String]) -> String {
    format!("{{{}:[{}]}}", quote(operator), children.join(","))
}

/// Builds the Mongo dialect.
pub fn dialect() -> Dialect {
    let operators = vec![
        OperatorSpec::builtin("==", equals, false),
        OperatorSpec::builtin("!=", |k: &str, v: &str| with_operator(k, "$ne", v), false),
        OperatorSpec::builtin("=gt=", |k: &str, v: &str| with_operator(k, "$gt", v), false),
        OperatorSpec::builtin("=ge=", |k: &str, v: &str| with_operator(k, "$gte", v), false),
        OperatorSpec::builtin("=lt=", |k: &str, v: &str| with_operator(k, "$lt", v), false),
        OperatorSpec::builtin("=le=", |k: &str, v: &str| with_operator(k, "$lte", v), false),
        OperatorSpec::builtin(
            "=in=",
            |k: &str, v: &str| with_operator(k, "$in", &format!("[{v}]")),
            true,
        ),
        OperatorSpec::builtin(
            "=out=",
            |k: &str, v: &str| with_operator(k, "$nin", &format!("[{v}]")),
            true,
        ),
    ];

    Dialect::new(
        operators,
        |children: &[String]| logical("$and", children),
        |children: &[String]| logical("$or", children),
    )
}
