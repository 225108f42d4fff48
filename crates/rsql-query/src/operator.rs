//! Operator matching.
//!
//! An operator token starts with `!` or `=`, contains no further `=` or parentheses, and ends
//! with `=`: `==`, `!=`, `=gt=`, `=in=` and so on. Matching is an explicit left-to-right scan
//! rather than a regular expression, and runs in linear time.

use std::ops::Range;

use crate::{dialect::OperatorSpec, error::QueryError, escape};

/// A comparison term split at its operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorMatch<'a> {
    /// Text before the operator.
    pub key: &'a str,
    /// The operator token itself.
    pub operator: &'a str,
    /// Text after the operator, unmodified.
    pub value: &'a str,
}

/// Returns the byte range of the first operator-shaped token in `term`.
pub fn find_token(term: &str) -> Option<Range<usize>> {
    let bytes = term.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        if !matches!(bytes[start], b'!' | b'=') {
            start += 1;
            continue;
        }

        let mut end = start + 1;
        while end < bytes.len() && !matches!(bytes[end], b'=' | b'(' | b')') {
            end += 1;
        }
        if end < bytes.len() && bytes[end] == b'=' {
            return Some(start..end + 1);
        }

        // Every start between here and `end` would stop at the same paren or end of input.
        start = end;
    }

    None
}

/// Checks whether `pattern` has the operator-token shape.
pub fn is_operator_shape(pattern: &str) -> bool {
    find_token(pattern) == Some(0..pattern.len())
}

/// Splits `term` into key, operator, and raw value, and looks the operator up in `specs`.
///
/// The first spec whose pattern equals the token wins.
pub fn match_operator<'a, 's>(
    term: &'a str,
    specs: &'s [OperatorSpec],
) -> Result<(OperatorMatch<'a>, &'s OperatorSpec), QueryError> {
    let range = find_token(term).ok_or_else(|| QueryError::NoOperatorMatch {
        term: escape::decode(term),
    })?;

    let found = OperatorMatch {
        key: term[..range.start].trim(),
        operator: &term[range.clone()],
        value: &term[range.end..],
    };

    if found.key.is_empty() {
        return Err(QueryError::EmptyKey {
            term: escape::decode(term),
        });
    }

    if escape::contains_placeholder(found.key) {
        return Err(QueryError::EscapedKey {
            term: escape::decode(term),
        });
    }

    let spec = specs
        .iter()
        .find(|spec| spec.pattern() == found.operator)
        .ok_or_else(|| QueryError::UnknownOperator {
            operator: found.operator.to_string(),
            term: escape::decode(term),
        })?;

    Ok((found, spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;

    #[test]
    fn finds_builtin_tokens() {
        assert_eq!(find_token("a==1"), Some(1..3));
        assert_eq!(find_token("a!=1"), Some(1..3));
        assert_eq!(find_token("age=gt=30"), Some(3..7));
        assert_eq!(find_token("id=in=(1,2)"), Some(2..6));
    }

    #[test]
    fn first_token_wins() {
        assert_eq!(find_token("a==b==c"), Some(1..3));
    }

    #[test]
    fn parens_break_a_candidate() {
        // `=(x` cannot be a token, the scan resumes after the paren.
        assert_eq!(find_token("a=(x)==1"), Some(5..7));
        assert_eq!(find_token("a=(b"), None);
    }

    #[test]
    fn no_token_in_plain_text() {
        assert_eq!(find_token("abc"), None);
        assert_eq!(find_token("a=b"), None);
        assert_eq!(find_token("!!!!"), None);
        assert_eq!(find_token(""), None);
    }

    #[test]
    fn shape_check() {
        for good in ["==", "!=", "=gt=", "=ex=", "!like=", "=~="] {
            assert!(is_operator_shape(good), "{good}");
        }
        for bad in ["=", "eq", "=gt", "gt=", "=g=t=", "=(=", "==x", ""] {
            assert!(!is_operator_shape(bad), "{bad}");
        }
    }

    #[test]
    fn splits_key_operator_value() {
        let dialect = Dialect::mongo();
        let (found, spec) = match_operator("age=ge=18", dialect.operators()).unwrap();
        assert_eq!(found.key, "age");
        assert_eq!(found.operator, "=ge=");
        assert_eq!(found.value, "18");
        assert_eq!(spec.pattern(), "=ge=");
    }

    #[test]
    fn empty_value_is_accepted() {
        let dialect = Dialect::mongo();
        let (found, _) = match_operator("name==", dialect.operators()).unwrap();
        assert_eq!(found.value, "");
    }

    #[test]
    fn missing_key() {
        let dialect = Dialect::mongo();
        assert_eq!(
            match_operator("==1", dialect.operators()).unwrap_err(),
            QueryError::EmptyKey { term: "==1".into() }
        );
    }

    #[test]
    fn escape_in_key_is_rejected() {
        let dialect = Dialect::mysql();
        let term = escape::encode(r"a\,b==1");
        assert_eq!(
            match_operator(&term, dialect.operators()).unwrap_err(),
            QueryError::EscapedKey {
                term: r"a\,b==1".into()
            }
        );
    }

    #[test]
    fn unknown_operator_differs_from_no_operator() {
        let dialect = Dialect::mongo();
        assert!(matches!(
            match_operator("a=like=x", dialect.operators()),
            Err(QueryError::UnknownOperator { ref operator, .. }) if operator == "=like="
        ));
        assert!(matches!(
            match_operator("just-a-word", dialect.operators()),
            Err(QueryError::NoOperatorMatch { .. })
        ));
    }
}
