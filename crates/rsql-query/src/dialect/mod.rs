//! Backend dialects.
//!
//! A dialect is an ordered operator registry plus the AND/OR combinators. It renders a parsed
//! [`Expr`] into a backend fragment; it never inspects values.

mod mongo;
mod sql;

use std::{fmt, sync::Arc};

use crate::{ast::Expr, error::QueryError, operator};

/// Renders one comparison for a backend.
pub trait Formatter: Send + Sync {
    /// Formats `key` and `value` (escapes already resolved).
    fn format(&self, key: &str, value: &str) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn format(&self, key: &str, value: &str) -> String {
        self(key, value)
    }
}

/// Joins rendered children into an AND or OR fragment.
pub trait Combinator: Send + Sync {
    /// Combines children, preserving their order.
    fn combine(&self, children: &[String]) -> String;
}

impl<F> Combinator for F
where
    F: Fn(&[String]) -> String + Send + Sync,
{
    fn combine(&self, children: &[String]) -> String {
        self(children)
    }
}

/// An operator token and the formatter that renders it.
#[derive(Clone)]
pub struct OperatorSpec {
    /// The token, e.g. `=gt=`.
    pattern: String,
    /// Renders comparisons using this operator.
    formatter: Arc<dyn Formatter>,
    /// Whether the value is a parenthesized list whose outer parentheses are stripped.
    list: bool,
}

impl OperatorSpec {
    /// Creates an operator whose value is passed through as written.
    ///
    /// Fails if `pattern` does not start with `!` or `=`, end with `=`, and avoid any other `=`
    /// or parentheses.
    pub fn new(
        pattern: impl Into<String>,
        formatter: impl Formatter + 'static,
    ) -> Result<Self, QueryError> {
        Self::checked(pattern.into(), Arc::new(formatter), false)
    }

    /// Creates a list operator: a value written as `(a,b,c)` reaches the formatter as `a,b,c`.
    pub fn new_list(
        pattern: impl Into<String>,
        formatter: impl Formatter + 'static,
    ) -> Result<Self, QueryError> {
        Self::checked(pattern.into(), Arc::new(formatter), true)
    }

    /// Registers another token that renders exactly like this one.
    pub fn alias(&self, pattern: impl Into<String>) -> Result<Self, QueryError> {
        Self::checked(pattern.into(), Arc::clone(&self.formatter), self.list)
    }

    /// Validates the pattern shape.
    fn checked(
        pattern: String,
        formatter: Arc<dyn Formatter>,
        list: bool,
    ) -> Result<Self, QueryError> {
        if !operator::is_operator_shape(&pattern) {
            return Err(QueryError::InvalidOperatorPattern { pattern });
        }
        Ok(Self {
            pattern,
            formatter,
            list,
        })
    }

    /// Creates one of the built-in operators, whose patterns are known to be well formed.
    fn builtin(pattern: &str, formatter: impl Formatter + 'static, list: bool) -> Self {
        Self {
            pattern: pattern.to_string(),
            formatter: Arc::new(formatter),
            list,
        }
    }

    /// The operator token.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether this is a list operator.
    pub fn is_list(&self) -> bool {
        self.list
    }

    /// Renders a comparison.
    pub fn format(&self, key: &str, value: &str) -> String {
        self.formatter.format(key, value)
    }
}

impl fmt::Debug for OperatorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorSpec")
            .field("pattern", &self.pattern)
            .field("list", &self.list)
            .finish_non_exhaustive()
    }
}

/// An operator registry with its combinators.
#[derive(Clone)]
pub struct Dialect {
    /// Operators in lookup order; the first pattern match wins.
    operators: Vec<OperatorSpec>,
    /// Renders `;`.
    and: Arc<dyn Combinator>,
    /// Renders `,`.
    or: Arc<dyn Combinator>,
}

impl Dialect {
    /// Creates a dialect from an operator list and the two combinators.
    pub fn new(
        operators: Vec<OperatorSpec>,
        and: impl Combinator + 'static,
        or: impl Combinator + 'static,
    ) -> Self {
        Self {
            operators,
            and: Arc::new(and),
            or: Arc::new(or),
        }
    }

    /// MongoDB filter documents: `{"a":1}`, `{"$and":[...]}`.
    pub fn mongo() -> Self {
        mongo::dialect()
    }

    /// SQL `WHERE` fragments: `a = 1`, `(a AND b)`.
    pub fn mysql() -> Self {
        sql::dialect()
    }

    /// Operators in lookup order.
    pub fn operators(&self) -> &[OperatorSpec] {
        &self.operators
    }

    /// Returns the first operator registered for `pattern`.
    pub fn operator(&self, pattern: &str) -> Option<&OperatorSpec> {
        self.operators.iter().find(|spec| spec.pattern == pattern)
    }

    /// Registers `operators` ahead of the existing ones, keeping their relative order.
    pub fn prepend_operators(mut self, operators: Vec<OperatorSpec>) -> Self {
        self.operators.splice(0..0, operators);
        self
    }

    /// Renders an expression tree.
    ///
    /// Children are rendered in their original order. Fails with
    /// [`QueryError::UnknownOperator`] if the tree uses a token this dialect does not register.
    pub fn render(&self, expr: &Expr) -> Result<String, QueryError> {
        match expr {
            Expr::Comparison(c) => {
                let spec = self.operator(&c.operator).ok_or_else(|| {
                    QueryError::UnknownOperator {
                        operator: c.operator.clone(),
                        term: format!("{}{}{}", c.key, c.operator, c.value),
                    }
                })?;
                Ok(spec.format(&c.key, &c.value))
            }
            Expr::And(children) => Ok(self.and.combine(&self.render_all(children)?)),
            Expr::Or(children) => Ok(self.or.combine(&self.render_all(children)?)),
        }
    }

    /// Renders each child in order.
    fn render_all(&self, children: &[Expr]) -> Result<Vec<String>, QueryError> {
        children.iter().map(|child| self.render(child)).collect()
    }
}

impl fmt::Debug for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dialect")
            .field("operators", &self.operators)
            .finish_non_exhaustive()
    }
}
