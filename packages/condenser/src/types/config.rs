//! Configuration for the condensation pipeline.

use serde::{Deserialize, Serialize};

/// Size and count budgets for one condensation run.
///
/// Every budget that bounds worst-case latency is a first-class tunable
/// here rather than a constant buried in a stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CondenseConfig {
    /// Maximum sentences considered by the relevance ranker.
    ///
    /// Ranking cost grows with sentence count x vocabulary size, so the
    /// candidate pool is capped regardless of input volume. Default: 500.
    pub max_candidate_sentences: usize,

    /// Maximum distinct terms retained in the TF-IDF vocabulary.
    ///
    /// Default: 500.
    pub max_vocabulary_terms: usize,

    /// Character window handed to entity recognition.
    ///
    /// Recognition runs on the first `max_entity_chars` characters of the
    /// filtered text. Default: 10,000.
    pub max_entity_chars: usize,

    /// Cap on retained paragraphs during keyword filtering.
    ///
    /// `None` keeps every matching paragraph. Default: None.
    pub max_filtered_paragraphs: Option<usize>,

    /// Sentences selected into the ranked digest. Default: 15.
    pub digest_sentences: usize,

    /// Sentence count the generation brief demands of the summary.
    ///
    /// The source system's two tunings disagreed on this (15 vs 20), so
    /// it is a parameter rather than a literal. Default: 15.
    pub summary_sentences: usize,

    /// Key points the brief demands per enabled political factor.
    ///
    /// Default: 3.
    pub points_per_factor: usize,
}

impl Default for CondenseConfig {
    fn default() -> Self {
        Self {
            max_candidate_sentences: 500,
            max_vocabulary_terms: 500,
            max_entity_chars: 10_000,
            max_filtered_paragraphs: None,
            digest_sentences: 15,
            summary_sentences: 15,
            points_per_factor: 3,
        }
    }
}

impl CondenseConfig {
    /// Create a config with default budgets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ranker's candidate sentence cap.
    pub fn with_max_candidate_sentences(mut self, max: usize) -> Self {
        self.max_candidate_sentences = max;
        self
    }

    /// Set the TF-IDF vocabulary cap.
    pub fn with_max_vocabulary_terms(mut self, max: usize) -> Self {
        self.max_vocabulary_terms = max;
        self
    }

    /// Set the entity-recognition character window.
    pub fn with_max_entity_chars(mut self, max: usize) -> Self {
        self.max_entity_chars = max;
        self
    }

    /// Cap the number of paragraphs kept by the keyword filter.
    pub fn with_max_filtered_paragraphs(mut self, max: usize) -> Self {
        self.max_filtered_paragraphs = Some(max);
        self
    }

    /// Set the digest size.
    pub fn with_digest_sentences(mut self, count: usize) -> Self {
        self.digest_sentences = count;
        self
    }

    /// Set the summary sentence count demanded by the brief.
    pub fn with_summary_sentences(mut self, count: usize) -> Self {
        self.summary_sentences = count;
        self
    }

    /// Set the per-factor point count demanded by the brief.
    pub fn with_points_per_factor(mut self, count: usize) -> Self {
        self.points_per_factor = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CondenseConfig::default();
        assert_eq!(config.max_candidate_sentences, 500);
        assert_eq!(config.max_vocabulary_terms, 500);
        assert_eq!(config.max_entity_chars, 10_000);
        assert_eq!(config.max_filtered_paragraphs, None);
        assert_eq!(config.digest_sentences, 15);
    }

    #[test]
    fn test_builders() {
        let config = CondenseConfig::new()
            .with_digest_sentences(20)
            .with_max_filtered_paragraphs(100);
        assert_eq!(config.digest_sentences, 20);
        assert_eq!(config.max_filtered_paragraphs, Some(100));
    }
}
