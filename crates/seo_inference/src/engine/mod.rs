mod cleanup;

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use seo_core::{Error, Generation, GenerationModel, GenerationRequest, Result, SeoRequest, SeoResult};
use tracing::{debug, info, warn};

use crate::prompts::{build_request, PromptPair, SYSTEM_INSTRUCTION};

pub use cleanup::clean_json_output;

/// Turns a request into one model call and a typed result.
#[derive(Clone)]
pub struct SeoEngine {
    model: Arc<dyn GenerationModel>,
}

impl fmt::Debug for SeoEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeoEngine")
            .field("model", &self.model.name())
            .finish()
    }
}

impl SeoEngine {
    pub fn new(model: Arc<dyn GenerationModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn preview(&self, request: &SeoRequest) -> PromptPair {
        build_request(request)
    }

    pub async fn generate(&self, request: &SeoRequest) -> Result<Generation> {
        let feature = request.feature();
        let pair = build_request(request);
        let call = GenerationRequest::json(pair.combined(), SYSTEM_INSTRUCTION);

        info!(%feature, model = self.model.name(), "Generating");
        debug!(prompt_chars = call.prompt.len(), "Prompt built");

        let outcome = self.call_and_parse(request, &call).await;
        match &outcome {
            Ok(result) => {
                for advisory in result.advisories() {
                    warn!(%feature, "{}", advisory);
                }
            }
            Err(e) => warn!(%feature, kind = e.kind(), error = %e, "Generation failed"),
        }

        Ok(Generation {
            result: outcome?,
            model: self.model.name().to_string(),
            generated_at: Utc::now(),
        })
    }

    async fn call_and_parse(&self, request: &SeoRequest, call: &GenerationRequest) -> Result<SeoResult> {
        let text = self.model.generate_text(call).await?;
        if text.trim().is_empty() {
            return Err(Error::EmptyResponse);
        }

        let cleaned = clean_json_output(&text);
        let value: Value = serde_json::from_str(&cleaned)?;
        SeoResult::parse_as(request.result_kind(), value)
    }
}
