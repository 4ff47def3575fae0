//! The Analyst - high-level entry point for a full analysis run.
//!
//! Wires the condensation pipeline to the generation collaborator and the
//! boundary stores: condense documents into a brief, generate the
//! narrative, persist the business-scoped summary record.

use tracing::info;

use crate::error::{CondenseError, Result};
use crate::pipeline::{format_summary_prompt, summary_prompt_hash, Condenser};
use crate::traits::{
    generate::Generator,
    store::{DocumentStore, SummaryStore},
};
use crate::types::{
    context::BusinessContext, document::ScrapedDocument, evidence::GenerationRequest,
    summary::SummaryRecord,
};

/// Runs the full analysis flow for one business at a time.
///
/// # Example
///
/// ```rust,ignore
/// use condenser::{Analyst, MemoryStore};
/// use condenser::testing::MockGenerator;
///
/// let analyst = Analyst::new(MemoryStore::new(), MockGenerator::new());
/// let record = analyst.analyze(&context, &documents).await?;
/// ```
pub struct Analyst<S, G>
where
    S: DocumentStore + SummaryStore,
    G: Generator,
{
    store: S,
    generator: G,
    condenser: Condenser,
}

impl<S, G> Analyst<S, G>
where
    S: DocumentStore + SummaryStore,
    G: Generator,
{
    /// Create an analyst with a default condenser.
    pub fn new(store: S, generator: G) -> Self {
        Self {
            store,
            generator,
            condenser: Condenser::new(),
        }
    }

    /// Create an analyst around a custom condenser.
    pub fn with_condenser(store: S, generator: G, condenser: Condenser) -> Self {
        Self {
            store,
            generator,
            condenser,
        }
    }

    /// Get the underlying condenser.
    pub fn condenser(&self) -> &Condenser {
        &self.condenser
    }

    /// Condense only: produce the generation request without calling the
    /// collaborator or persisting anything.
    pub async fn condense(
        &self,
        context: &BusinessContext,
        documents: &[ScrapedDocument],
    ) -> Result<GenerationRequest> {
        self.condenser.condense(context, documents).await
    }

    /// Full run: condense, generate, persist.
    ///
    /// A failed run persists nothing and yields no record.
    pub async fn analyze(
        &self,
        context: &BusinessContext,
        documents: &[ScrapedDocument],
    ) -> Result<SummaryRecord> {
        let request = self.condenser.condense(context, documents).await?;
        let prompt = format_summary_prompt(&request, self.condenser.config());

        let summary = self.generator.generate(&prompt).await?;
        if summary.trim().is_empty() {
            return Err(CondenseError::Generation(
                "generation service returned an empty response".into(),
            ));
        }

        let record = SummaryRecord::new(context.normalized_name(), summary, summary_prompt_hash());
        self.store.store_summary(&record).await?;

        info!(business = %record.business_name, "summary persisted");
        Ok(record)
    }

    /// Full run against the stored document collection for the business.
    pub async fn analyze_stored(&self, context: &BusinessContext) -> Result<SummaryRecord> {
        let business = context.normalized_name();
        let documents = self
            .store
            .get_documents(&business)
            .await?
            .ok_or(CondenseError::DocumentsNotFound { business })?;

        self.analyze(context, &documents).await
    }

    /// Fetch the stored summary for a business, if any.
    pub async fn stored_summary(&self, business: &str) -> Result<Option<SummaryRecord>> {
        self.store.get_summary(business).await
    }
}
