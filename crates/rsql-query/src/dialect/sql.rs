//! SQL `WHERE` fragments (MySQL flavoured).

use super::{Dialect, OperatorSpec};

/// Builds the SQL dialect.
pub fn dialect() -> Dialect {
    let operators = vec![
        OperatorSpec::builtin("==", |k: &str, v: &str| format!("{k} = {v}"), false),
        OperatorSpec::builtin("!=", |k: &str, v: &str| format!("{k} != {v}"), false),
        OperatorSpec::builtin("=gt=", |k: &str, v: &str| format!("{k} > {v}"), false),
        OperatorSpec::builtin("=ge=", |k: &str, v: &str| format!("{k} >= {v}"), false),
        OperatorSpec::builtin("=lt=", |k: &str, v: &str| format!("{k} < {v}"), false),
        OperatorSpec::builtin("=le=", |k: &str, v: &str| format!("{k} <= {v}"), false),
        OperatorSpec::builtin("=in=", |k: &str, v: &str| format!("{k} IN ({v})"), true),
        OperatorSpec::builtin("=out=", |k: &str, v: &str| format!("{k} NOT IN ({v})"), true),
    ];

    Dialect::new(
        operators,
        |children: &[String]| format!("({})", children.join(" AND ")),
        |children: &[String]| format!("({})", children.join(" OR ")),
    )
}
