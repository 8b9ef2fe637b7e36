use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/state", get(handlers::get_state))
        .route("/api/feature", post(handlers::select_feature))
        .route("/api/prompt", post(handlers::preview_prompt))
        .route("/api/generate", post(handlers::generate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

pub async fn serve(state: AppState, addr: SocketAddr) -> seo_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, model = state.engine.model_name(), "🌐 Listening");
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::{create_app, serve, AppState};
    pub use seo_core::{Error, Result};
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use seo_core::{GenerationModel, GenerationRequest};
    use seo_inference::{models::DummyModel, SeoEngine};
    use serde_json::{json, Value};
    use tokio::sync::Notify;
    use tower::ServiceExt;

    fn dummy_app() -> Router {
        create_app(AppState::new(SeoEngine::new(Arc::new(DummyModel::new()))))
    }

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(body) => Body::from(body.to_string()),
                None => Body::empty(),
            })
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_generate_keywords() {
        let app = dummy_app();
        let (status, body) = call(
            &app,
            "POST",
            "/api/generate",
            Some(json!({ "fields": { "domain": "techgear.com", "description": "office furniture" } })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["model"], "dummy");
        assert_eq!(body["result"]["keywords"][0]["keyword"], "techgear.com");

        let (_, state) = call(&app, "GET", "/api/state", None).await;
        assert_eq!(state["feature"], "KEYWORD_RESEARCH");
        assert_eq!(state["busy"], false);
        assert!(state["result"]["strategySummary"].is_string());
    }

    #[tokio::test]
    async fn test_blank_field_is_bad_request() {
        let app = dummy_app();
        let (status, body) = call(
            &app,
            "POST",
            "/api/generate",
            Some(json!({ "fields": { "domain": "techgear.com", "description": " " } })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please provide both Domain Name and Short Description.");
    }

    #[tokio::test]
    async fn test_switching_feature_clears_result() {
        let app = dummy_app();
        call(
            &app,
            "POST",
            "/api/generate",
            Some(json!({ "fields": { "domain": "techgear.com", "description": "office furniture" } })),
        )
        .await;

        let (status, state) = call(
            &app,
            "POST",
            "/api/feature",
            Some(json!({ "feature": "CONTENT_ENGINE", "subType": "blog" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(state["feature"], "CONTENT_ENGINE");
        assert_eq!(state["subType"], "blog");
        assert!(state["result"].is_null());

        let (status, pair) = call(
            &app,
            "POST",
            "/api/prompt",
            Some(json!({ "fields": { "focusKeyword": "intermittent fasting" } })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(pair["prompt"].as_str().unwrap().contains("intermittent fasting"));
        assert!(pair["schema"].as_str().unwrap().contains("\"introduction\""));
    }

    #[derive(Debug)]
    struct GatedModel {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl GenerationModel for GatedModel {
        fn name(&self) -> &str {
            "gated"
        }

        async fn generate_text(&self, _request: &GenerationRequest) -> seo_core::Result<String> {
            self.gate.notified().await;
            Ok("not json".to_string())
        }
    }

    #[tokio::test]
    async fn test_busy_then_failure_message() {
        let gate = Arc::new(Notify::new());
        let model = GatedModel { gate: gate.clone() };
        let app = create_app(AppState::new(SeoEngine::new(Arc::new(model))));
        let body = json!({ "fields": { "domain": "techgear.com", "description": "office furniture" } });

        let first = {
            let app = app.clone();
            let body = body.clone();
            tokio::spawn(async move { call(&app, "POST", "/api/generate", Some(body)).await })
        };

        loop {
            let (_, state) = call(&app, "GET", "/api/state", None).await;
            if state["busy"] == true {
                break;
            }
            tokio::task::yield_now().await;
        }

        let second = json!({ "fields": { "domain": "other.com", "description": "something else" } });
        let (status, _) = call(&app, "POST", "/api/generate", Some(second)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        let (_, state) = call(&app, "GET", "/api/state", None).await;
        assert_eq!(state["fields"]["domain"], "techgear.com");
        assert_eq!(state["fields"]["description"], "office furniture");

        gate.notify_one();
        let (status, error) = first.await.unwrap();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(error["error"], "Failed to generate keywords. Please try again.");

        let (_, state) = call(&app, "GET", "/api/state", None).await;
        assert_eq!(state["busy"], false);
        assert_eq!(state["error"], "Failed to generate keywords. Please try again.");
    }
}
