//! Typed errors for the condensation library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during a condensation run.
#[derive(Debug, Error)]
pub enum CondenseError {
    /// Required context field absent or invalid. Aborts the run before
    /// any stage executes.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// A document entry has an unexpected shape (wrong-typed field).
    ///
    /// A missing `paragraphs` field is valid and means "no content";
    /// a wrong-typed field is fatal for the run.
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// A stage's underlying text-processing operation failed.
    #[error("{stage} extraction failed: {reason}")]
    Extraction { stage: &'static str, reason: String },

    /// Generation collaborator unavailable, failed, or returned nothing.
    #[error("generation error: {0}")]
    Generation(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No document collection stored for a business.
    #[error("no documents stored for: {business}")]
    DocumentsNotFound { business: String },
}

impl CondenseError {
    /// Shorthand for a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Shorthand for a stage failure.
    pub fn extraction(stage: &'static str, reason: impl Into<String>) -> Self {
        Self::Extraction {
            stage,
            reason: reason.into(),
        }
    }
}

/// Result type alias for condensation operations.
pub type Result<T> = std::result::Result<T, CondenseError>;
