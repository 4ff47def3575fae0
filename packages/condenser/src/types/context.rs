//! Business context - the immutable input describing one analysis run.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CondenseError, Result};

fn default_industry() -> String {
    "General Industry".to_string()
}

fn default_geography() -> String {
    "Global".to_string()
}

fn default_target_market() -> String {
    "General Market".to_string()
}

fn default_time_frame() -> String {
    "Short-term".to_string()
}

/// The business under analysis, as supplied by the upstream request.
///
/// Immutable once constructed for a pipeline run. The political-factor
/// map keeps insertion order so the downstream brief lists factors in
/// the order the caller enabled them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessContext {
    /// Name of the business (required, non-empty)
    pub business_name: String,

    /// Industry the business operates in
    #[serde(default = "default_industry")]
    pub industry: String,

    /// Geographic focus of the analysis
    #[serde(default = "default_geography")]
    pub geographical_focus: String,

    /// Target market description
    #[serde(default = "default_target_market")]
    pub target_market: String,

    /// Named competitors, in the order supplied
    #[serde(default)]
    pub competitors: Vec<String>,

    /// Analysis horizon (e.g., "Short-term", "Long-term")
    #[serde(default = "default_time_frame")]
    pub time_frame: String,

    /// Political-factor name -> enabled flag
    #[serde(default)]
    pub political_factors: IndexMap<String, bool>,
}

impl BusinessContext {
    /// Create a context for a named business with defaults elsewhere.
    pub fn new(business_name: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            industry: default_industry(),
            geographical_focus: default_geography(),
            target_market: default_target_market(),
            competitors: Vec::new(),
            time_frame: default_time_frame(),
            political_factors: IndexMap::new(),
        }
    }

    /// Set the industry.
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = industry.into();
        self
    }

    /// Set the geographic focus.
    pub fn with_geography(mut self, geography: impl Into<String>) -> Self {
        self.geographical_focus = geography.into();
        self
    }

    /// Set the target market.
    pub fn with_target_market(mut self, market: impl Into<String>) -> Self {
        self.target_market = market.into();
        self
    }

    /// Add a competitor.
    pub fn with_competitor(mut self, competitor: impl Into<String>) -> Self {
        self.competitors.push(competitor.into());
        self
    }

    /// Set the time frame.
    pub fn with_time_frame(mut self, time_frame: impl Into<String>) -> Self {
        self.time_frame = time_frame.into();
        self
    }

    /// Set a political factor flag.
    pub fn with_factor(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.political_factors.insert(name.into(), enabled);
        self
    }

    /// Validate required fields. Fails before any stage executes.
    pub fn validate(&self) -> Result<()> {
        if self.business_name.trim().is_empty() {
            return Err(CondenseError::config("business name is required"));
        }
        Ok(())
    }

    /// Lower-cased business name, used to key persisted artifacts.
    pub fn normalized_name(&self) -> String {
        self.business_name.to_lowercase()
    }

    /// Names of factors whose flag is true, in insertion order.
    pub fn enabled_factors(&self) -> Vec<&str> {
        self.political_factors
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
