//! Summary record - the persisted per-business result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// The persisted outcome of one analysis run, keyed by normalized
/// (lower-cased) business name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Normalized business name this record belongs to
    pub business_name: String,

    /// The generated political-risk narrative
    pub summary: String,

    /// When the run completed
    pub created_at: DateTime<Utc>,

    /// Hash of the brief the summary was generated from.
    ///
    /// If the brief template changes, stored summaries are stale.
    pub prompt_hash: String,
}

impl SummaryRecord {
    /// Create a record for a business.
    pub fn new(
        business_name: impl Into<String>,
        summary: impl Into<String>,
        prompt_hash: impl Into<String>,
    ) -> Self {
        Self {
            business_name: business_name.into(),
            summary: summary.into(),
            created_at: Utc::now(),
            prompt_hash: prompt_hash.into(),
        }
    }

    /// Hash a brief for staleness checks.
    pub fn hash_prompt(prompt: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(prompt.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Check whether this record was generated from a different brief.
    pub fn is_stale(&self, current_prompt_hash: &str) -> bool {
        self.prompt_hash != current_prompt_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_hash_is_stable() {
        let a = SummaryRecord::hash_prompt("brief");
        let b = SummaryRecord::hash_prompt("brief");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // SHA-256 hex
    }

    #[test]
    fn test_is_stale() {
        let record = SummaryRecord::new("acme", "text", SummaryRecord::hash_prompt("v1"));
        assert!(!record.is_stale(&SummaryRecord::hash_prompt("v1")));
        assert!(record.is_stale(&SummaryRecord::hash_prompt("v2")));
    }
}
