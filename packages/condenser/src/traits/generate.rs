//! Generation collaborator trait.

use async_trait::async_trait;

use crate::error::Result;

/// The external text-generation service.
///
/// Implementations wrap a specific provider and handle its transport and
/// authentication. The pipeline hands over a fully-assembled brief and
/// takes the response as free-form text; it checks only that a response
/// is present.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate free-form text from a brief.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
