//! Testing utilities including mock implementations.
//!
//! Useful for testing applications that use the condensation library
//! without making real generation calls.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{CondenseError, Result};
use crate::traits::generate::Generator;
use crate::types::{context::BusinessContext, document::ScrapedDocument};

/// A mock generation service for testing.
///
/// Returns a configurable canned response and records every brief it is
/// handed, so tests can assert on prompt contents. Clones share state:
/// keep a clone before handing the mock to an [`crate::Analyst`] and
/// inspect the recorded briefs through it.
#[derive(Clone)]
pub struct MockGenerator {
    response: Arc<RwLock<String>>,
    fail: bool,
    prompts: Arc<RwLock<Vec<String>>>,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerator {
    /// Create a mock that answers with a fixed placeholder narrative.
    pub fn new() -> Self {
        Self {
            response: Arc::new(RwLock::new("Mock political analysis.".to_string())),
            fail: false,
            prompts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Set the canned response.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        *self.response.write().unwrap() = response.into();
        self
    }

    /// Create a mock whose calls always fail.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Briefs received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }

    /// Number of generation calls made.
    pub fn call_count(&self) -> usize {
        self.prompts.read().unwrap().len()
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.write().unwrap().push(prompt.to_string());

        if self.fail {
            return Err(CondenseError::Generation("mock generator failure".into()));
        }
        Ok(self.response.read().unwrap().clone())
    }
}

/// A context with a representative factor mix, for tests.
pub fn sample_context() -> BusinessContext {
    BusinessContext::new("Acme")
        .with_industry("Retail")
        .with_geography("Europe")
        .with_target_market("Consumers")
        .with_competitor("Globex")
        .with_factor("tariffs", true)
        .with_factor("elections", false)
}

/// A small scraped collection with relevant and irrelevant content.
pub fn sample_documents() -> Vec<ScrapedDocument> {
    vec![
        ScrapedDocument::new(
            "https://news.example/tariffs",
            [
                "Acme faces a 10% tariff increase under new trade law.",
                "The European Commission proposed fines of €1,200 for non-compliance.",
                "Unrelated sports news.",
            ],
        )
        .with_title("Tariff shake-up"),
        ScrapedDocument::failed("https://blocked.example", "Failed to retrieve content"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_prompts() {
        let generator = MockGenerator::new().with_response("canned");

        let response = generator.generate("the brief").await.unwrap();
        assert_eq!(response, "canned");
        assert_eq!(generator.prompts(), vec!["the brief".to_string()]);
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let generator = MockGenerator::failing();
        assert!(generator.generate("brief").await.is_err());
        assert_eq!(generator.call_count(), 1);
    }
}
