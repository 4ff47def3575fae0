//! Pipeline orchestration.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{CondenseError, Result};
use crate::extractors::{RegexFactExtractor, RuleBasedRecognizer};
use crate::keywords::{build_keywords, filter_documents};
use crate::ranker::RelevanceRanker;
use crate::traits::extract::{EntityRecognizer, FactExtractor};
use crate::types::{
    config::CondenseConfig,
    context::BusinessContext,
    document::ScrapedDocument,
    evidence::GenerationRequest,
};

/// Orchestrates one condensation run.
///
/// Holds the injected extraction handles and budgets; construct once per
/// process and share by reference. No ambient singletons are involved -
/// swapping a rule-based recognizer for a model-backed one is a
/// constructor argument, not a code change.
pub struct Condenser {
    config: CondenseConfig,
    facts: Arc<dyn FactExtractor>,
    entities: Arc<dyn EntityRecognizer>,
    ranker: Arc<RelevanceRanker>,
}

impl Default for Condenser {
    fn default() -> Self {
        Self::new()
    }
}

impl Condenser {
    /// Create a condenser with the default rule-based extractors and
    /// default budgets.
    pub fn new() -> Self {
        Self {
            config: CondenseConfig::default(),
            facts: Arc::new(RegexFactExtractor::new()),
            entities: Arc::new(RuleBasedRecognizer::new()),
            ranker: Arc::new(RelevanceRanker::new()),
        }
    }

    /// Use custom budgets.
    pub fn with_config(mut self, config: CondenseConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject a fact extractor.
    pub fn with_fact_extractor(mut self, facts: Arc<dyn FactExtractor>) -> Self {
        self.facts = facts;
        self
    }

    /// Inject an entity recognizer.
    pub fn with_entity_recognizer(mut self, entities: Arc<dyn EntityRecognizer>) -> Self {
        self.entities = entities;
        self
    }

    /// Inject a ranker.
    pub fn with_ranker(mut self, ranker: Arc<RelevanceRanker>) -> Self {
        self.ranker = ranker;
        self
    }

    /// Get the configured budgets.
    pub fn config(&self) -> &CondenseConfig {
        &self.config
    }

    /// Run the pipeline: filter, project, assemble.
    ///
    /// An empty document collection is not an error; it propagates as a
    /// degenerate, near-empty request. Stage failures are fatal for the
    /// run and surface to the caller - there are no retries and no
    /// partial requests.
    pub async fn condense(
        &self,
        context: &BusinessContext,
        documents: &[ScrapedDocument],
    ) -> Result<GenerationRequest> {
        context.validate()?;

        let keywords = build_keywords(context);
        debug!(keywords = keywords.len(), business = %context.business_name, "keywords built");

        let filtered: Arc<str> =
            filter_documents(documents, &keywords, self.config.max_filtered_paragraphs).into();
        info!(
            documents = documents.len(),
            filtered_len = filtered.len(),
            "documents filtered"
        );

        // Three independent read-only projections of the same immutable
        // filtered text; all CPU-bound, so they run off the async thread.
        let facts_task = {
            let facts = Arc::clone(&self.facts);
            let text = Arc::clone(&filtered);
            tokio::task::spawn_blocking(move || facts.extract_facts(&text))
        };
        let entities_task = {
            let entities = Arc::clone(&self.entities);
            let text = Arc::clone(&filtered);
            let max_chars = self.config.max_entity_chars;
            tokio::task::spawn_blocking(move || entities.extract_entities(&text, max_chars))
        };
        let digest_task = {
            let ranker = Arc::clone(&self.ranker);
            let text = Arc::clone(&filtered);
            let top_n = self.config.digest_sentences;
            let max_candidates = self.config.max_candidate_sentences;
            let max_vocab = self.config.max_vocabulary_terms;
            tokio::task::spawn_blocking(move || {
                ranker.rank(&text, top_n, max_candidates, max_vocab)
            })
        };

        let (facts, entities, digest) = tokio::join!(facts_task, entities_task, digest_task);
        let numeric_facts =
            facts.map_err(|e| CondenseError::extraction("numeric-fact", e.to_string()))?;
        let named_entities =
            entities.map_err(|e| CondenseError::extraction("entity", e.to_string()))?;
        let digest =
            digest.map_err(|e| CondenseError::extraction("ranking", e.to_string()))?;

        info!(
            facts = numeric_facts.len(),
            entities = named_entities.len(),
            digest_sentences = digest.len(),
            "condensation complete"
        );

        Ok(GenerationRequest {
            context: context.clone(),
            digest_text: digest.text(),
            numeric_facts,
            named_entities,
        })
    }
}
