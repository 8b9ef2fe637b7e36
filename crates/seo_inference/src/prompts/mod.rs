//! Prompt and response-schema text for each task.
//!
//! Every template is plain interpolation of the request's fields; identical
//! requests always produce byte-identical text.

mod templates;

use serde::Serialize;
use seo_core::SeoRequest;

/// Persona and output-format constraints sent with every call.
pub const SYSTEM_INSTRUCTION: &str = "You are the \"SEO Core AI Engine,\" a high-performance SEO Strategist and Expert Copywriter.
Strictly adhere to 2026 SEO standards (E-E-A-T, Topical Authority, Semantic Search).
Output MUST be valid JSON only. Do not wrap in markdown code blocks.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptPair {
    pub prompt: String,
    pub schema: String,
}

impl PromptPair {
    /// The single request body sent to the model.
    pub fn combined(&self) -> String {
        format!("{}\n\n{}", self.prompt, self.schema)
    }
}

pub fn build_request(request: &SeoRequest) -> PromptPair {
    let (prompt, schema) = match request {
        SeoRequest::KeywordResearch {
            domain,
            description,
        } => (
            templates::keyword_research(domain, description),
            templates::KEYWORD_RESEARCH_SCHEMA,
        ),
        SeoRequest::PageOptimization {
            domain,
            focus_keyword,
            description,
        } => (
            templates::page_optimization(domain, focus_keyword, description),
            templates::PAGE_OPTIMIZATION_SCHEMA,
        ),
        SeoRequest::ProductCopy {
            product_name,
            description,
            focus_keyword,
        } => (
            templates::product_copy(product_name, focus_keyword, description),
            templates::PRODUCT_COPY_SCHEMA,
        ),
        SeoRequest::BlogContent { focus_keyword } => (
            templates::blog_content(focus_keyword),
            templates::BLOG_CONTENT_SCHEMA,
        ),
    };

    PromptPair {
        prompt,
        schema: schema.to_string(),
    }
}
