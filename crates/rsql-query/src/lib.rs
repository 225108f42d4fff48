//! RSQL filter parsing.
//!
//! RSQL is a URL-friendly filter language derived from FIQL. This crate parses it into an
//! [`Expr`] tree and renders that tree into a backend fragment through a [`Dialect`]:
//!
//! - **Comparisons**: `name==bob`, `age=gt=30`, `id=in=(1,2,3)`
//! - **AND**: `a==1;b==2`
//! - **OR**: `a==1,b==2` (AND binds tighter)
//! - **Grouping**: `(a==1,b==2);c==3`
//! - **Escapes**: `\(`, `\)`, `\,`, `\;`, `\=` inside values
//!
//! Values are never interpreted; type checking them is the database's job.
//!
//! # Example
//!
//! ```
//! use rsql_query::{Parser, ProcessOptions};
//!
//! let sql = Parser::mysql()
//!     .process("(a==1,b==2);c!=3", &ProcessOptions::default())
//!     .unwrap();
//! assert_eq!(sql, "((a = 1 OR b = 2) AND c != 3)");
//! ```

#![warn(missing_docs)]

mod ast;
mod classify;
mod dialect;
mod error;
mod escape;
mod operator;
mod options;
mod parser;
mod scan;
mod transform;

pub use ast::{Comparison, Expr};
pub use classify::{Parens, classify};
pub use dialect::{Combinator, Dialect, Formatter, OperatorSpec};
pub use error::QueryError;
pub use escape::{decode, encode, unescape};
pub use operator::{OperatorMatch, find_token, is_operator_shape, match_operator};
pub use options::ProcessOptions;
pub use parser::{DEFAULT_MAX_DEPTH, Parser, ParserBuilder};
pub use scan::{find_top_level, split_and, split_or, split_top_level};
pub use transform::KeyTransformer;
