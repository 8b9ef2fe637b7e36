use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use seo_core::{Error, GenerationModel, GenerationRequest, Result};
use url::Url;

use crate::Config;

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

pub struct GeminiModel {
    client: Client,
    api_key: String,
    model_name: String,
    endpoint: Url,
}

impl fmt::Debug for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl GeminiModel {
    /// Fails immediately when no API key is configured; nothing is sent.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::Configuration("API key is missing from environment variables.".to_string())
            })?
            .to_string();

        let model_name = config
            .model_name
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let endpoint = Self::endpoint(base_url, &model_name)?;

        Ok(Self {
            client: Client::new(),
            api_key,
            model_name,
            endpoint,
        })
    }

    fn endpoint(base_url: &str, model_name: &str) -> Result<Url> {
        let mut base = Url::parse(base_url)
            .map_err(|e| Error::Configuration(format!("Invalid model URL {}: {}", base_url, e)))?;
        // A path prefix without a trailing slash would otherwise be replaced by `join`.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(&format!("v1beta/models/{}:generateContent", model_name))
            .map_err(|e| Error::Configuration(format!("Invalid model name {}: {}", model_name, e)))
    }
}

#[async_trait]
impl GenerationModel for GeminiModel {
    fn name(&self) -> &str {
        &self.model_name
    }

    async fn generate_text(&self, request: &GenerationRequest) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &request.system_instruction,
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: &request.response_mime_type,
            },
        };

        tracing::debug!(model = %self.model_name, "Gemini generateContent request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let reply: GenerateContentResponse = response.json().await?;
        let text: String = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(Error::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recorded {
        hits: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
    }

    async fn spawn_endpoint(reply: Value, status: u16) -> (String, Recorded) {
        let recorded = Recorded::default();
        let app = Router::new()
            .route(
                "/v1beta/models/:model",
                post(
                    move |State(recorded): State<Recorded>, headers: HeaderMap, Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            recorded.hits.lock().unwrap().push((headers, body));
                            (
                                axum::http::StatusCode::from_u16(status).unwrap(),
                                Json(reply),
                            )
                        }
                    },
                ),
            )
            .with_state(recorded.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), recorded)
    }

    fn config(base_url: &str) -> Config {
        Config {
            api_key: Some("test-key".to_string()),
            base_url: Some(base_url.to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_model_requires_api_key() {
        let err = GeminiModel::new(&Config::default()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let blank = Config {
            api_key: Some("   ".to_string()),
            ..Config::default()
        };
        assert!(GeminiModel::new(&blank).is_err());

        let model = GeminiModel::new(&config(DEFAULT_BASE_URL)).unwrap();
        assert_eq!(model.name(), DEFAULT_MODEL);
        assert!(!format!("{:?}", model).contains("test-key"));
    }

    #[test]
    fn test_endpoint_path() {
        let model = GeminiModel::new(&config("http://localhost:9000")).unwrap();
        assert_eq!(
            model.endpoint.as_str(),
            "http://localhost:9000/v1beta/models/gemini-3-pro-preview:generateContent"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        for base in ["https://proxy.example.com/gemini", "https://proxy.example.com/gemini/"] {
            let model = GeminiModel::new(&config(base)).unwrap();
            assert_eq!(
                model.endpoint.as_str(),
                "https://proxy.example.com/gemini/v1beta/models/gemini-3-pro-preview:generateContent"
            );
        }
    }

    #[tokio::test]
    async fn test_generate_text_round_trip() {
        let reply = json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "```json\n{\"a\":" }, { "text": "1}\n```" }] }
            }]
        });
        let (base_url, recorded) = spawn_endpoint(reply, 200).await;
        let model = GeminiModel::new(&config(&base_url)).unwrap();

        let text = model
            .generate_text(&GenerationRequest::json("the prompt", "the persona"))
            .await
            .unwrap();
        assert_eq!(text, "```json\n{\"a\":1}\n```");

        let hits = recorded.hits.lock().unwrap();
        assert_eq!(hits.len(), 1);
        let (headers, body) = &hits[0];
        assert_eq!(headers.get("x-goog-api-key").unwrap(), "test-key");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "the prompt");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "the persona");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    }

    #[tokio::test]
    async fn test_error_status_is_endpoint_failure() {
        let (base_url, _) = spawn_endpoint(json!({ "error": { "message": "quota" } }), 429).await;
        let model = GeminiModel::new(&config(&base_url)).unwrap();
        let err = model
            .generate_text(&GenerationRequest::json("p", "s"))
            .await
            .unwrap_err();
        match err {
            Error::Endpoint { status, body } => {
                assert_eq!(status, 429);
                assert!(body.contains("quota"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_no_candidates_is_empty_response() {
        let (base_url, _) = spawn_endpoint(json!({ "candidates": [] }), 200).await;
        let model = GeminiModel::new(&config(&base_url)).unwrap();
        let err = model
            .generate_text(&GenerationRequest::json("p", "s"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EmptyResponse));
    }
}
