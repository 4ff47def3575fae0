//! Evidence types - the pipeline's intermediate and terminal artifacts.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::context::BusinessContext;

/// The ranked, size-bounded sentence subset passed to the generation step.
///
/// Sentences are kept in score order (highest first), not document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankedDigest {
    /// Selected sentences, highest-scoring first
    pub sentences: Vec<String>,
}

impl RankedDigest {
    /// Create a digest from ranked sentences.
    pub fn new(sentences: Vec<String>) -> Self {
        Self { sentences }
    }

    /// An empty digest.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no sentence survived ranking.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Number of sentences in the digest.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// The digest as a single space-joined string.
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }
}

/// Terminal artifact of the pipeline, consumed by the generation service.
///
/// Never mutated after assembly. Fact and entity sets use ordered sets so
/// prompt assembly is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The business context the run was created from, unmodified
    pub context: BusinessContext,

    /// The ranked digest text
    pub digest_text: String,

    /// Quantitative evidence mined from the filtered text
    pub numeric_facts: BTreeSet<String>,

    /// Legal / geopolitical / organizational entities
    pub named_entities: BTreeSet<String>,
}

impl GenerationRequest {
    /// Numeric facts joined for inclusion in the brief.
    pub fn facts_line(&self) -> String {
        self.numeric_facts
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Named entities joined for inclusion in the brief.
    pub fn entities_line(&self) -> String {
        self.named_entities
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether the run produced no evidence at all.
    pub fn is_empty(&self) -> bool {
        self.digest_text.is_empty()
            && self.numeric_facts.is_empty()
            && self.named_entities.is_empty()
    }
}
