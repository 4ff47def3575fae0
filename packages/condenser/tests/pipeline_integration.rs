//! Integration tests for the full condensation flow.
//!
//! These tests drive the pipeline end to end:
//! 1. Filter documents against context keywords
//! 2. Project facts, entities, and the ranked digest
//! 3. Assemble the brief
//! 4. Generate and persist the summary record

use condenser::testing::{sample_context, sample_documents, MockGenerator};
use condenser::{
    Analyst, BusinessContext, CondenseConfig, CondenseError, Condenser, DocumentStore,
    MemoryStore, ScrapedDocument,
};

#[tokio::test]
async fn test_acme_tariff_scenario() {
    let context = BusinessContext::new("Acme")
        .with_industry("Retail")
        .with_factor("tariffs", true)
        .with_factor("elections", false);
    let documents = vec![ScrapedDocument::new(
        "a",
        [
            "Acme faces a 10% tariff increase under new trade law.",
            "Unrelated sports news.",
        ],
    )];

    let condenser = Condenser::new();
    let request = condenser.condense(&context, &documents).await.unwrap();

    assert!(request.digest_text.contains("tariff increase"));
    assert!(!request.digest_text.contains("sports"));
    assert!(request.numeric_facts.contains("10%"));
    assert_eq!(request.context.enabled_factors(), vec!["tariffs"]);
}

#[tokio::test]
async fn test_empty_collection_produces_degenerate_request() {
    let condenser = Condenser::new();
    let request = condenser.condense(&sample_context(), &[]).await.unwrap();

    assert!(request.digest_text.is_empty());
    assert!(request.numeric_facts.is_empty());
    assert!(request.named_entities.is_empty());
    assert_eq!(request.context.business_name, "Acme");
}

#[tokio::test]
async fn test_full_analysis_persists_summary() {
    let analyst = Analyst::new(
        MemoryStore::new(),
        MockGenerator::new().with_response("A measured political outlook."),
    );

    let record = analyst
        .analyze(&sample_context(), &sample_documents())
        .await
        .unwrap();

    assert_eq!(record.business_name, "acme");
    assert_eq!(record.summary, "A measured political outlook.");

    let stored = analyst.stored_summary("acme").await.unwrap().unwrap();
    assert_eq!(stored.summary, record.summary);
}

#[tokio::test]
async fn test_brief_carries_evidence_to_generator() {
    let generator = MockGenerator::new();
    let probe = generator.clone();

    let analyst = Analyst::new(MemoryStore::new(), generator);
    analyst
        .analyze(&sample_context(), &sample_documents())
        .await
        .unwrap();

    let prompts = probe.prompts();
    assert_eq!(prompts.len(), 1);

    let brief = &prompts[0];
    assert!(brief.contains("**Business Name**: Acme"));
    assert!(brief.contains("**Competitors**: Globex"));
    assert!(brief.contains("10%"));
    assert!(brief.contains("€1,200"));
    assert!(brief.contains("European Commission"));
    assert!(brief.contains("tariffs"));
    assert!(!brief.contains("sports news"));
}

#[tokio::test]
async fn test_failed_generation_persists_nothing() {
    let analyst = Analyst::new(MemoryStore::new(), MockGenerator::failing());

    let result = analyst
        .analyze(&sample_context(), &sample_documents())
        .await;

    assert!(matches!(result, Err(CondenseError::Generation(_))));
    assert!(analyst.stored_summary("acme").await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_generation_response_is_an_error() {
    let analyst = Analyst::new(MemoryStore::new(), MockGenerator::new().with_response("   "));

    let result = analyst
        .analyze(&sample_context(), &sample_documents())
        .await;

    assert!(matches!(result, Err(CondenseError::Generation(_))));
}

#[tokio::test]
async fn test_analyze_stored_reads_document_collection() {
    let store = MemoryStore::new();
    store
        .store_documents("acme", &sample_documents())
        .await
        .unwrap();

    let analyst = Analyst::new(store, MockGenerator::new());
    let record = analyst.analyze_stored(&sample_context()).await.unwrap();

    assert_eq!(record.business_name, "acme");
}

#[tokio::test]
async fn test_analyze_stored_without_documents_fails() {
    let analyst = Analyst::new(MemoryStore::new(), MockGenerator::new());

    let result = analyst.analyze_stored(&sample_context()).await;
    assert!(matches!(
        result,
        Err(CondenseError::DocumentsNotFound { .. })
    ));
}

#[tokio::test]
async fn test_budgets_bound_the_digest() {
    let condenser = Condenser::new().with_config(
        CondenseConfig::default()
            .with_digest_sentences(2)
            .with_max_candidate_sentences(10),
    );

    let paragraphs: Vec<String> = (0..50)
        .map(|i| format!("Tariff ruling number {i} affected regional trade flows."))
        .collect();
    let documents = vec![ScrapedDocument::new("a", paragraphs)];

    let request = condenser
        .condense(&sample_context(), &documents)
        .await
        .unwrap();

    assert_eq!(request.digest_text.matches('.').count(), 2);
}

#[tokio::test]
async fn test_malformed_document_collection_fails_at_the_boundary() {
    // Wrong-typed fields are rejected when the collection is decoded,
    // before any stage runs.
    let raw = r#"[{"url": "a", "paragraphs": [42]}]"#;
    let decoded: Result<Vec<ScrapedDocument>, _> = serde_json::from_str(raw);

    let error = CondenseError::from(decoded.unwrap_err());
    assert!(matches!(error, CondenseError::MalformedDocument(_)));
}
