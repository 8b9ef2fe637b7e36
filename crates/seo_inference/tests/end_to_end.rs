use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use seo_core::{
    ContentSubType, Error, Feature, FeatureSelector, GenerationModel, GenerationRequest, Result,
    SeoResult,
};
use seo_inference::models::DummyModel;
use seo_inference::{create_model, Config, SeoEngine};

#[derive(Debug)]
struct CannedModel {
    reply: String,
    calls: AtomicUsize,
}

#[async_trait]
impl GenerationModel for CannedModel {
    fn name(&self) -> &str {
        "canned"
    }

    async fn generate_text(&self, _request: &GenerationRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_keyword_research_flow() {
    let model = Arc::new(CannedModel {
        reply: r#"{"strategySummary":"x","keywords":[]}"#.to_string(),
        calls: AtomicUsize::new(0),
    });
    let engine = SeoEngine::new(model.clone());

    let mut selector = FeatureSelector::new();
    selector.select(Feature::KeywordResearch);
    selector.set_fields(fields(&[
        ("domain", "techgear.com"),
        ("description", "sells ergonomic office furniture"),
    ]));

    let request = selector.request().unwrap();
    let pair = engine.preview(&request);
    assert!(pair.prompt.contains("Domain: techgear.com"));
    assert!(pair.schema.contains("strategySummary"));

    let ticket = selector.begin().unwrap();
    assert!(selector.is_busy());
    let generation = engine.generate(&request).await.unwrap();
    assert!(selector.complete(ticket, generation.result));
    assert!(!selector.is_busy());

    match selector.result() {
        Some(SeoResult::KeywordResearch(research)) => {
            assert_eq!(research.strategy_summary, "x");
            assert!(research.keywords.is_empty());
        }
        _ => panic!("expected a keyword research result"),
    }
    assert_eq!(model.calls.load(Ordering::SeqCst), 1);
}

async fn spawn_counting_endpoint() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = axum::Router::new().fallback(move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            axum::Json(serde_json::json!({ "candidates": [] }))
        }
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), hits)
}

#[tokio::test]
async fn test_missing_credential_never_reaches_the_network() {
    let (base_url, hits) = spawn_counting_endpoint().await;
    let config = Config::from_lookup(|key| match key {
        "GEMINI_BASE_URL" => Some(base_url.clone()),
        _ => None,
    });

    let err = create_model(&config).map(SeoEngine::new).unwrap_err();
    assert!(matches!(
        &err,
        Error::Configuration(msg) if msg == "API key is missing from environment variables."
    ));
    assert_eq!(err.kind(), "configuration");
    assert!(!err.is_generation_failure());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_blank_field_blocks_generation() {
    let model = Arc::new(CannedModel {
        reply: "{}".to_string(),
        calls: AtomicUsize::new(0),
    });

    let mut selector = FeatureSelector::new();
    selector.select(Feature::ContentEngine);
    selector.set_sub_type(ContentSubType::Blog);
    selector.set_fields(fields(&[("focusKeyword", "   ")]));

    let err = selector.request().unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(selector.error().is_some());
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_dummy_backend_product_copy() {
    let engine = SeoEngine::new(Arc::new(DummyModel::new()));

    let mut selector = FeatureSelector::new();
    selector.select(Feature::ContentEngine);
    selector.set_fields(fields(&[
        ("productName", "ErgoLift X1"),
        ("description", "height adjustable desk"),
        ("focusKeyword", "standing desk"),
    ]));

    let generation = engine.generate(&selector.request().unwrap()).await.unwrap();
    match generation.result {
        SeoResult::ProductCopy(copy) => {
            assert_eq!(copy.content_type, ContentSubType::Product);
            assert!(copy.meta_title.contains("ErgoLift X1"));
        }
        _ => panic!("expected product copy"),
    }
    assert_eq!(generation.model, "dummy");
}
