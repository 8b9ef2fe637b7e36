use std::fmt;

use async_trait::async_trait;

use crate::types::GenerationRequest;
use crate::Result;

/// A hosted text-generation backend. One call, one text reply.
#[async_trait]
pub trait GenerationModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Sends the prompt and returns the raw reply text, which may still be
    /// wrapped in code fences.
    async fn generate_text(&self, request: &GenerationRequest) -> Result<String>;
}
