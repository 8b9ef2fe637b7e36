pub mod dummy;
pub mod gemini;

use std::sync::Arc;

use seo_core::{Error, GenerationModel, Result};

pub use dummy::DummyModel;
pub use gemini::GeminiModel;

pub const AVAILABLE_MODELS: [&str; 2] = ["gemini", "dummy"];

/// Builds the configured backend. Credential problems surface here, before
/// any request is attempted.
pub fn create_model(config: &crate::Config) -> Result<Arc<dyn GenerationModel>> {
    let provider = config.provider.as_deref().unwrap_or("gemini");
    let model: Arc<dyn GenerationModel> = match provider {
        "gemini" => Arc::new(GeminiModel::new(config)?),
        "dummy" => Arc::new(DummyModel::new()),
        other => {
            return Err(Error::Configuration(format!(
                "Unknown model '{}'. Available models: {}",
                other,
                AVAILABLE_MODELS.join(", ")
            )))
        }
    };
    tracing::info!(model = model.name(), "🧠 Generation model ready");
    Ok(model)
}
