//! Boundary scanning.
//!
//! Finds separators at parenthesis depth zero. Escaped separators never reach this module as
//! separators: the escaper has already replaced them with placeholders.

use std::iter;

use crate::{error::QueryError, escape};

/// The OR separator.
pub const OR: char = ',';

/// The AND separator.
pub const AND: char = ';';

/// Returns the byte offsets of every `separator` at parenthesis depth zero.
///
/// Fails with [`QueryError::UnbalancedParens`] when a `)` closes more than was opened, or when
/// the text ends with parentheses still open.
pub fn find_top_level(text: &str, separator: char) -> Result<Vec<usize>, QueryError> {
    let mut depth = 0usize;
    let mut found = Vec::new();
    let mut last_open = 0;

    for (position, (offset, c)) in text.char_indices().enumerate() {
        match c {
            '(' => {
                if depth == 0 {
                    last_open = position;
                }
                depth += 1;
            }
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| unbalanced(text, position))?;
            }
            c if c == separator && depth == 0 => found.push(offset),
            _ => {}
        }
    }

    if depth > 0 {
        return Err(unbalanced(text, last_open));
    }

    Ok(found)
}

/// Splits `text` on top-level occurrences of `separator`, trimming each term.
///
/// An empty term (adjacent separators, a leading or trailing separator, or blank input) fails
/// with [`QueryError::EmptyTerm`].
pub fn split_top_level(text: &str, separator: char) -> Result<Vec<&str>, QueryError> {
    let boundaries = find_top_level(text, separator)?;
    let mut terms = Vec::with_capacity(boundaries.len() + 1);
    let mut start = 0;

    for end in boundaries.into_iter().chain(iter::once(text.len())) {
        let term = text[start..end].trim();
        if term.is_empty() {
            return Err(QueryError::EmptyTerm {
                fragment: escape::decode(text),
                position: text[..start].chars().count(),
            });
        }
        terms.push(term);
        start = end + separator.len_utf8();
    }

    Ok(terms)
}

/// Splits on top-level `,`.
pub fn split_or(text: &str) -> Result<Vec<&str>, QueryError> {
    split_top_level(text, OR)
}

/// Splits on top-level `;`.
pub fn split_and(text: &str) -> Result<Vec<&str>, QueryError> {
    split_top_level(text, AND)
}

/// Builds an unbalanced-parentheses error for `text`.
fn unbalanced(text: &str, position: usize) -> QueryError {
    QueryError::UnbalancedParens {
        fragment: escape::decode(text),
        position,
    }
}
