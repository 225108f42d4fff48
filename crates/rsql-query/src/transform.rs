//! Key transformers.
//!
//! Transformers normalize parsed keys (case conversion, prefixing, renaming) before validation
//! and formatting. They run in registration order.

use std::sync::Arc;

/// Rewrites a parsed key.
pub trait KeyTransformer: Send + Sync {
    /// Returns the transformed key.
    fn transform(&self, key: &str) -> String;
}

impl<F> KeyTransformer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn transform(&self, key: &str) -> String {
        self(key)
    }
}

/// Applies every transformer to `key`, left to right.
pub fn apply_all(transformers: &[Arc<dyn KeyTransformer>], key: &str) -> String {
    transformers
        .iter()
        .fold(key.to_string(), |key, t| t.transform(&key))
}
