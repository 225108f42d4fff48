//! RSQL parser.
//!
//! Recursive descent over text rather than tokens: each level splits on top-level `,` then `;`,
//! and every AND term is either a parenthesized group (parsed again, one level deeper) or a
//! comparison.
//!
//! # Grammar
//!
//! ```text
//! expression → and_list ("," and_list)*
//! and_list   → term (";" term)*
//! term       → "(" expression ")" | comparison
//! comparison → KEY OPERATOR VALUE
//! OPERATOR   → ("!" | "=") [^=()]* "="
//! ```
//!
//! # Precedence (highest to lowest)
//!
//! 1. Grouping: `(...)`
//! 2. AND: `;`
//! 3. OR: `,`

use std::{fmt, sync::Arc};

use crate::{
    ast::{Comparison, Expr},
    classify::{self, Parens},
    dialect::{Dialect, OperatorSpec},
    error::QueryError,
    escape, operator,
    options::ProcessOptions,
    scan,
    transform::{self, KeyTransformer},
};

/// Default limit on nested grouping parentheses.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// A configured, immutable RSQL parser.
///
/// Build one with [`Parser::builder`] (or [`Parser::mongo`] / [`Parser::mysql`]) and share it
/// freely: parsing never mutates it.
#[derive(Clone)]
pub struct Parser {
    /// Operator registry and combinators, custom operators first.
    dialect: Dialect,
    /// Applied to every key in order.
    transformers: Vec<Arc<dyn KeyTransformer>>,
    /// Maximum grouping depth.
    max_depth: usize,
}

/// Configures a [`Parser`]. Consumed by [`ParserBuilder::build`].
pub struct ParserBuilder {
    /// The base dialect.
    dialect: Dialect,
    /// Custom operators in registration order.
    operators: Vec<OperatorSpec>,
    /// Key transformers in registration order.
    transformers: Vec<Arc<dyn KeyTransformer>>,
    /// Maximum grouping depth.
    max_depth: usize,
}

impl ParserBuilder {
    /// Registers a custom operator.
    ///
    /// Custom operators are consulted before the dialect's own, so registering `==` here
    /// replaces the built-in rendering.
    pub fn with_operator(mut self, spec: OperatorSpec) -> Self {
        self.operators.push(spec);
        self
    }

    /// Registers a key transformer, run after those already registered.
    pub fn with_key_transformer(mut self, transformer: impl KeyTransformer + 'static) -> Self {
        self.transformers.push(Arc::new(transformer));
        self
    }

    /// Sets the maximum grouping depth. Zero disables grouping parentheses.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Freezes the configuration.
    pub fn build(self) -> Parser {
        Parser {
            dialect: self.dialect.prepend_operators(self.operators),
            transformers: self.transformers,
            max_depth: self.max_depth,
        }
    }
}

impl Parser {
    /// Starts configuring a parser for `dialect`.
    pub fn builder(dialect: Dialect) -> ParserBuilder {
        ParserBuilder {
            dialect,
            operators: Vec::new(),
            transformers: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// A parser producing MongoDB filter documents.
    pub fn mongo() -> Self {
        Self::builder(Dialect::mongo()).build()
    }

    /// A parser producing SQL `WHERE` fragments.
    pub fn mysql() -> Self {
        Self::builder(Dialect::mysql()).build()
    }

    /// The dialect used for operator lookup and rendering.
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// The maximum grouping depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses `query` into an expression tree.
    ///
    /// Keys are transformed and validated against `options`; values have their escapes
    /// resolved. The first error aborts the parse.
    pub fn parse(&self, query: &str, options: &ProcessOptions) -> Result<Expr, QueryError> {
        let encoded = escape::encode(query);
        let expr = self.parse_expression(&encoded, 0, options)?;
        log::debug!(
            "parsed rsql query with {} comparisons",
            expr.comparisons().len()
        );
        Ok(expr)
    }

    /// Parses `query` and renders it with this parser's dialect.
    pub fn process(&self, query: &str, options: &ProcessOptions) -> Result<String, QueryError> {
        let expr = self.parse(query, options)?;
        self.dialect.render(&expr)
    }

    /// Parses: expression → and_list ("," and_list)*
    fn parse_expression(
        &self,
        text: &str,
        depth: usize,
        options: &ProcessOptions,
    ) -> Result<Expr, QueryError> {
        let mut alternatives = Vec::new();
        for or_term in scan::split_or(text)? {
            alternatives.push(self.parse_and_list(or_term, depth, options)?);
        }
        Ok(Expr::or(alternatives))
    }

    /// Parses: and_list → term (";" term)*
    fn parse_and_list(
        &self,
        text: &str,
        depth: usize,
        options: &ProcessOptions,
    ) -> Result<Expr, QueryError> {
        let mut terms = Vec::new();
        for and_term in scan::split_and(text)? {
            terms.push(self.parse_term(and_term, depth, options)?);
        }
        Ok(Expr::and(terms))
    }

    /// Parses: term → "(" expression ")" | comparison
    fn parse_term(
        &self,
        term: &str,
        depth: usize,
        options: &ProcessOptions,
    ) -> Result<Expr, QueryError> {
        match classify::classify(term)? {
            Parens::Grouping(inner) => {
                if depth >= self.max_depth {
                    return Err(QueryError::TooDeep {
                        max_depth: self.max_depth,
                    });
                }
                log::trace!("group at depth {}: {}", depth + 1, escape::decode(inner));
                self.parse_expression(inner, depth + 1, options)
            }
            Parens::ListArg | Parens::NoParens => self.parse_comparison(term, options),
        }
    }

    /// Parses: comparison → KEY OPERATOR VALUE
    fn parse_comparison(&self, term: &str, options: &ProcessOptions) -> Result<Expr, QueryError> {
        let (found, spec) = operator::match_operator(term, self.dialect.operators())?;

        let key = transform::apply_all(&self.transformers, found.key);
        options.check_key(&key)?;

        let raw_value = if spec.is_list() {
            classify::strip_list_parens(found.value)
        } else {
            found.value
        };

        Ok(Comparison::new(key, spec.pattern(), escape::unescape(raw_value)).into())
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("dialect", &self.dialect)
            .field("transformers", &self.transformers.len())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
