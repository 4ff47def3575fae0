//! The generation brief.
//!
//! The brief hands the generation collaborator the business context, the
//! structural contract (sentence and point counts), and the condensed
//! evidence. The collaborator's response is treated as opaque text.

use sha2::{Digest, Sha256};

use crate::types::{config::CondenseConfig, evidence::GenerationRequest};

/// Brief template for the political-risk summary.
pub const SUMMARY_PROMPT: &str = r#"You are an expert in business and political analysis. Keep the following business context in mind:

**Business Name**: {business_name}
**Industry**: {industry}
**Geographical Focus**: {geographical_focus}
**Target Market**: {target_market}
**Competitors**: {competitors}
**Time Frame**: {time_frame}

### Task:
Generate a political analysis based on the extracted text.

#### 1. Summary (Strictly {summary_sentences} Sentences)
- The summary must be exactly {summary_sentences} sentences, with each sentence on a new line.
- Each sentence should be concise (no more than 60 words) and convey one key insight about the political factors.
- Maintain a balance between statistical data (e.g., tax rates, regulations) and textual analysis (e.g., implications, trends).
- Avoid redundancy: each sentence should introduce a new aspect of the analysis.
- Include numerical data: {numeric_facts}
- Mention key policies, laws, and organizations: {named_entities}

#### 2. Political Factor Analysis (Point-Wise)
- Analyze only the political factors listed as enabled.
- For each enabled political factor, provide exactly {points_per_factor} distinct key points.
- Each point must be directly relevant to {business_name} and the {industry} industry.
- Use real-world data or insights where applicable; avoid vague or overly generic statements.

**Enabled Political Factors:**
{enabled_factors}

### Important Constraints:
- Keep the language formal and analytical.
- Ensure strict adherence to sentence and point limits.
- All insights should remain business- and industry-relevant.

Here is the extracted text for analysis:

{digest}"#;

/// Format the brief for a generation request.
pub fn format_summary_prompt(request: &GenerationRequest, config: &CondenseConfig) -> String {
    let context = &request.context;

    let competitors = if context.competitors.is_empty() {
        "No specific competitors mentioned".to_string()
    } else {
        context.competitors.join(", ")
    };

    let enabled_factors = {
        let enabled = context.enabled_factors();
        if enabled.is_empty() {
            "None".to_string()
        } else {
            enabled.join(", ")
        }
    };

    SUMMARY_PROMPT
        .replace("{business_name}", &context.business_name)
        .replace("{industry}", &context.industry)
        .replace("{geographical_focus}", &context.geographical_focus)
        .replace("{target_market}", &context.target_market)
        .replace("{competitors}", &competitors)
        .replace("{time_frame}", &context.time_frame)
        .replace("{summary_sentences}", &config.summary_sentences.to_string())
        .replace("{points_per_factor}", &config.points_per_factor.to_string())
        .replace("{numeric_facts}", &request.facts_line())
        .replace("{named_entities}", &request.entities_line())
        .replace("{enabled_factors}", &enabled_factors)
        .replace("{digest}", &request.digest_text)
}

/// Hash of the brief template, for summary staleness checks.
pub fn summary_prompt_hash() -> String {
    let mut hasher = Sha256::new();
    hasher.update(SUMMARY_PROMPT.as_bytes());
    format!("{:x}", hasher.finalize())
}
