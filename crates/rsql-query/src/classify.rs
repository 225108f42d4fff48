//! Parenthesis classification.
//!
//! `(` plays two roles in RSQL: it opens a logical group (`(a==1,b==2);c==3`) or an operator's
//! argument list (`a=in=(1,2,3)`). Which one depends on where it sits relative to the operator.

use crate::{error::QueryError, escape, operator};

/// How the parentheses in an AND term are to be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parens<'a> {
    /// The whole term is a parenthesized sub-expression; holds the text between the outer pair.
    Grouping(&'a str),
    /// Parentheses occur only after the operator, as part of the value.
    ListArg,
    /// The term has no parentheses.
    NoParens,
}

/// Classifies the parentheses of a single, already trimmed AND term.
pub fn classify(term: &str) -> Result<Parens<'_>, QueryError> {
    if term.starts_with('(') {
        return match matching_close(term) {
            Some(close) if close == term.len() - 1 => Ok(Parens::Grouping(&term[1..close])),
            Some(_) => Err(malformed(term)),
            None => Err(QueryError::UnbalancedParens {
                fragment: escape::decode(term),
                position: 0,
            }),
        };
    }

    let operator_start = operator::find_token(term).map_or(term.len(), |range| range.start);
    let (head, tail) = term.split_at(operator_start);

    if head.contains(['(', ')']) {
        return Err(malformed(term));
    }

    if tail.contains(['(', ')']) {
        Ok(Parens::ListArg)
    } else {
        Ok(Parens::NoParens)
    }
}

/// Strips one pair of list parentheses when they enclose the whole value.
///
/// `(1,2,3)` becomes `1,2,3`; `(1),(2)` is returned unchanged because its first `(` closes early.
pub fn strip_list_parens(value: &str) -> &str {
    match matching_close(value) {
        Some(close) if value.starts_with('(') && close == value.len() - 1 => &value[1..close],
        _ => value,
    }
}

/// Returns the byte offset of the `)` matching the `(` at offset zero.
fn matching_close(term: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, c) in term.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Builds a malformed-parentheses error for `term`.
fn malformed(term: &str) -> QueryError {
    QueryError::MalformedParens {
        term: escape::decode(term),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_term_group() {
        assert_eq!(
            classify("(a==1,b==2)").unwrap(),
            Parens::Grouping("a==1,b==2")
        );
    }

    #[test]
    fn nested_group_keeps_inner_parens() {
        assert_eq!(
            classify("((a==1;b==2),c=in=(1,2))").unwrap(),
            Parens::Grouping("(a==1;b==2),c=in=(1,2)")
        );
    }

    #[test]
    fn list_argument() {
        assert_eq!(classify("a=in=(1,2,3)").unwrap(), Parens::ListArg);
        assert_eq!(classify("a==(x)").unwrap(), Parens::ListArg);
    }

    #[test]
    fn plain_comparison() {
        assert_eq!(classify("a==1").unwrap(), Parens::NoParens);
        assert_eq!(classify("word").unwrap(), Parens::NoParens);
    }

    #[test]
    fn trailing_text_after_group_is_malformed() {
        assert!(matches!(
            classify("(a==1)x"),
            Err(QueryError::MalformedParens { .. })
        ));
        assert!(matches!(
            classify("(a==1)(b==2)"),
            Err(QueryError::MalformedParens { .. })
        ));
    }

    #[test]
    fn parens_inside_key_are_malformed() {
        assert!(matches!(
            classify("a(b)==1"),
            Err(QueryError::MalformedParens { .. })
        ));
        assert!(matches!(
            classify("f(x)"),
            Err(QueryError::MalformedParens { .. })
        ));
    }

    #[test]
    fn list_parens_are_stripped_once() {
        assert_eq!(strip_list_parens("(1,2,3)"), "1,2,3");
        assert_eq!(strip_list_parens("((1),2)"), "(1),2");
        assert_eq!(strip_list_parens("(1),(2)"), "(1),(2)");
        assert_eq!(strip_list_parens("1,2"), "1,2");
        assert_eq!(strip_list_parens("()"), "");
    }

    #[test]
    fn unclosed_group() {
        assert!(matches!(
            classify("(a==1"),
            Err(QueryError::UnbalancedParens { .. })
        ));
    }
}
