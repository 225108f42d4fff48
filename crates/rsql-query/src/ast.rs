//! RSQL expression tree.
//!
//! Parsing builds this tree; dialects render it. Keeping the two apart means one parse can be
//! rendered by several backends.

use std::fmt;

/// A single `key<operator>value` comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Key after every key transformer has run.
    pub key: String,
    /// The operator token as registered, e.g. `=gt=`.
    pub operator: String,
    /// Value with escapes resolved to literal characters (and list parentheses stripped for list
    /// operators).
    pub value: String,
}

impl Comparison {
    /// Creates a comparison.
    pub fn new(
        key: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// A parsed RSQL expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A leaf comparison.
    Comparison(Comparison),

    /// Conjunction (`;`): every child must hold.
    And(Vec<Self>),

    /// Disjunction (`,`): at least one child must hold.
    Or(Vec<Self>),
}

impl Expr {
    /// Creates an And expression, flattening nested Ands.
    pub fn and(exprs: Vec<Self>) -> Self {
        let flattened: Vec<Self> = exprs
            .into_iter()
            .flat_map(|e| match e {
                Self::And(inner) => inner,
                other => vec![other],
            })
            .collect();

        Self::collapse(flattened, Self::And)
    }

    /// Creates an Or expression, flattening nested Ors.
    pub fn or(exprs: Vec<Self>) -> Self {
        let flattened: Vec<Self> = exprs
            .into_iter()
            .flat_map(|e| match e {
                Self::Or(inner) => inner,
                other => vec![other],
            })
            .collect();

        Self::collapse(flattened, Self::Or)
    }

    /// Unwraps a single child, otherwise wraps the children with `wrap`.
    fn collapse(children: Vec<Self>, wrap: fn(Vec<Self>) -> Self) -> Self {
        match <[Self; 1]>::try_from(children) {
            Ok([only]) => only,
            Err(children) => wrap(children),
        }
    }

    /// Returns every comparison in left-to-right order.
    pub fn comparisons(&self) -> Vec<&Comparison> {
        let mut out = Vec::new();
        self.collect_comparisons(&mut out);
        out
    }

    /// Appends this expression's comparisons to `out`.
    fn collect_comparisons<'a>(&'a self, out: &mut Vec<&'a Comparison>) {
        match self {
            Self::Comparison(c) => out.push(c),
            Self::And(children) | Self::Or(children) => {
                for child in children {
                    child.collect_comparisons(out);
                }
            }
        }
    }

    /// Formats the expression as a tree structure with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::Comparison(c) => {
                writeln!(f, "{prefix}Comparison({:?} {} {:?})", c.key, c.operator, c.value)
            }
            Self::And(exprs) => {
                writeln!(f, "{prefix}And")?;
                for expr in exprs {
                    expr.fmt_tree(f, indent + 1)?;
                }
                Ok(())
            }
            Self::Or(exprs) => {
                writeln!(f, "{prefix}Or")?;
                for expr in exprs {
                    expr.fmt_tree(f, indent + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl From<Comparison> for Expr {
    fn from(comparison: Comparison) -> Self {
        Self::Comparison(comparison)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}
