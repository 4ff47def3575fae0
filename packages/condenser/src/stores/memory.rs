//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::Result;
use crate::traits::store::{DocumentStore, SummaryStore};
use crate::types::{document::ScrapedDocument, summary::SummaryRecord};

/// In-memory storage for document collections and summary records.
///
/// Keys are normalized to lower case, so "Acme" and "acme" address the
/// same records. Useful for testing and development; data is lost on
/// restart.
pub struct MemoryStore {
    documents: RwLock<HashMap<String, Vec<ScrapedDocument>>>,
    summaries: RwLock<HashMap<String, SummaryRecord>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            summaries: RwLock::new(HashMap::new()),
        }
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        self.documents.write().unwrap().clear();
        self.summaries.write().unwrap().clear();
    }

    /// Number of stored document collections.
    pub fn document_collection_count(&self) -> usize {
        self.documents.read().unwrap().len()
    }

    /// Number of stored summary records.
    pub fn summary_count(&self) -> usize {
        self.summaries.read().unwrap().len()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn store_documents(&self, business: &str, documents: &[ScrapedDocument]) -> Result<()> {
        self.documents
            .write()
            .unwrap()
            .insert(business.to_lowercase(), documents.to_vec());
        Ok(())
    }

    async fn get_documents(&self, business: &str) -> Result<Option<Vec<ScrapedDocument>>> {
        Ok(self
            .documents
            .read()
            .unwrap()
            .get(&business.to_lowercase())
            .cloned())
    }
}

#[async_trait]
impl SummaryStore for MemoryStore {
    async fn store_summary(&self, record: &SummaryRecord) -> Result<()> {
        self.summaries
            .write()
            .unwrap()
            .insert(record.business_name.to_lowercase(), record.clone());
        Ok(())
    }

    async fn get_summary(&self, business: &str) -> Result<Option<SummaryRecord>> {
        Ok(self
            .summaries
            .read()
            .unwrap()
            .get(&business.to_lowercase())
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_document_round_trip_normalizes_key() {
        let store = MemoryStore::new();
        let documents = vec![ScrapedDocument::new("a", ["text"])];

        store.store_documents("Acme", &documents).await.unwrap();
        let loaded = store.get_documents("acme").await.unwrap().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].url, "a");
    }

    #[tokio::test]
    async fn test_summary_round_trip() {
        let store = MemoryStore::new();
        let record = SummaryRecord::new("acme", "summary text", "hash");

        store.store_summary(&record).await.unwrap();
        let loaded = store.get_summary("ACME").await.unwrap().unwrap();

        assert_eq!(loaded.summary, "summary text");
    }

    #[tokio::test]
    async fn test_missing_business_yields_none() {
        let store = MemoryStore::new();
        assert!(store.get_documents("nobody").await.unwrap().is_none());
        assert!(store.get_summary("nobody").await.unwrap().is_none());
    }
}
