//! Storage traits for the boundary artifacts.
//!
//! Each run consumes a per-business document collection and produces a
//! per-business summary record, both keyed by the normalized
//! (lower-cased) business name.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{document::ScrapedDocument, summary::SummaryRecord};

/// Stores scraped document collections per business.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist the document collection for a business.
    async fn store_documents(&self, business: &str, documents: &[ScrapedDocument]) -> Result<()>;

    /// Fetch the stored collection for a business, if any.
    async fn get_documents(&self, business: &str) -> Result<Option<Vec<ScrapedDocument>>>;
}

/// Stores generated summary records per business.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// Persist a summary record under its business name.
    async fn store_summary(&self, record: &SummaryRecord) -> Result<()>;

    /// Fetch the stored summary for a business, if any.
    async fn get_summary(&self, business: &str) -> Result<Option<SummaryRecord>>;
}
