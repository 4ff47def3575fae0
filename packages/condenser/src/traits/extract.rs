//! Extraction capability traits.
//!
//! Numeric-fact mining and entity recognition are separate, swappable
//! capabilities: the default implementations are rule-based, but a
//! model-backed recognizer can replace either without touching the
//! orchestrator.

use std::collections::BTreeSet;

/// Mines quantitative evidence from raw text.
pub trait FactExtractor: Send + Sync {
    /// Extract the set of numeric facts present in `text`.
    ///
    /// Output has set semantics only: callers must not rely on surface
    /// order, just membership.
    fn extract_facts(&self, text: &str) -> BTreeSet<String>;
}

/// Recognizes named entities in a bounded text window.
pub trait EntityRecognizer: Send + Sync {
    /// Extract entities from the first `max_chars` characters of `text`.
    ///
    /// Implementations retain only legal, geopolitical, and
    /// organizational entities; other categories are discarded. Must be
    /// idempotent on a fixed window and deduplicate by surface string.
    fn extract_entities(&self, text: &str, max_chars: usize) -> BTreeSet<String>;
}
