//! Per-call processing options.

use std::collections::HashSet;

use crate::error::QueryError;

/// Key validation applied to every comparison after key transformation.
///
/// With both sets given, a key must be allowed and not forbidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    /// If set, only these keys may appear.
    pub allowed_keys: Option<HashSet<String>>,
    /// If set, these keys may not appear.
    pub forbidden_keys: Option<HashSet<String>>,
}

impl ProcessOptions {
    /// Options that accept every key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts keys to `keys`.
    pub fn with_allowed_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Rejects every key in `keys`.
    pub fn with_forbidden_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Checks a transformed key against both sets.
    pub fn check_key(&self, key: &str) -> Result<(), QueryError> {
        if self
            .allowed_keys
            .as_ref()
            .is_some_and(|allowed| !allowed.contains(key))
        {
            return Err(QueryError::KeyNotAllowed { key: key.into() });
        }
        if self
            .forbidden_keys
            .as_ref()
            .is_some_and(|forbidden| forbidden.contains(key))
        {
            return Err(QueryError::KeyForbidden { key: key.into() });
        }
        Ok(())
    }
}
