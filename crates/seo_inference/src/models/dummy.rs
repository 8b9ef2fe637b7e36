use std::fmt;

use seo_core::{GenerationModel, GenerationRequest, Result};
use serde_json::json;

/// Offline backend that answers each task with a small, well-formed sample.
/// Useful for trying the CLI and web API without an API key.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Pulls the value of a `Label: value` line out of the prompt.
fn prompt_field<'a>(prompt: &'a str, label: &str) -> &'a str {
    prompt
        .lines()
        .find_map(|line| line.trim().strip_prefix(label))
        .map(str::trim)
        .unwrap_or("")
}

#[async_trait::async_trait]
impl GenerationModel for DummyModel {
    fn name(&self) -> &str {
        "dummy"
    }

    async fn generate_text(&self, request: &GenerationRequest) -> Result<String> {
        let prompt = request.prompt.as_str();
        let focus = prompt_field(prompt, "Focus Keyword:");

        let reply = if prompt.starts_with("TASK: EXACT-MATCH KEYWORD RESEARCH") {
            let domain = prompt_field(prompt, "Domain:");
            json!({
                "strategySummary": format!("Sample strategy for {}. Replace the dummy model with a real backend for live research.", domain),
                "keywords": [
                    { "keyword": domain, "category": "Focus", "indicationLevel": "Very Important" },
                    { "keyword": format!("{} reviews", domain), "category": "Short-tail", "indicationLevel": "Very Important" },
                    { "keyword": format!("how to choose from {}", domain), "category": "Long-tail", "indicationLevel": "Important" },
                    { "keyword": format!("{} alternatives", domain), "category": "Related", "indicationLevel": "Less Important" }
                ]
            })
        } else if prompt.starts_with("TASK: DYNAMIC PAGE OPTIMIZATION") {
            json!({
                "metaTitle": format!("{}: The Complete Guide", focus),
                "metaDescription": format!("Everything you need to know about {}. Read the guide today.", focus),
                "keywordCluster": {
                    "shortTail": [focus],
                    "longTail": [format!("what is {}", focus)],
                    "related": [format!("{} tips", focus)]
                },
                "headings": [
                    { "level": "H1", "text": format!("{}: The Complete Guide", focus), "description": "Introduce the topic." },
                    { "level": "H2", "text": format!("What Is {}?", focus), "description": "Define the term." },
                    { "level": "H3", "text": "Key Concepts", "description": "Cover the basics." },
                    { "level": "H2", "text": "Strategic Summary", "description": "Restate the focus keyword." }
                ]
            })
        } else if prompt.starts_with("TASK: SEO COPYWRITING") {
            let product = prompt_field(prompt, "Product Name:");
            json!({
                "type": "product",
                "keywordMapping": {
                    "focus": [focus],
                    "shortTail": [product],
                    "longTail": [format!("best {}", focus)],
                    "related": [format!("{} deals", focus)]
                },
                "metaTitle": format!("{} | {}", product, focus),
                "metaDescription": format!("Shop {} today.", product),
                "intro": format!("{} is the {} you have been waiting for.", product, focus),
                "marketingDesc": format!("{} is built for daily use.", product),
                "features": [
                    { "heading": format!("Build Quality + {}", focus), "explanation": "Sample feature explanation." }
                ],
                "conclusion": format!("Get your {} now. Add to Cart.", product)
            })
        } else {
            json!({
                "type": "blog",
                "metaTitle": format!("{}: What You Should Know", focus),
                "metaDescription": format!("A practical look at {}.", focus),
                "introduction": {
                    "para1": format!("This article covers {}.", focus),
                    "para2": "Sample paragraph two.",
                    "para3": "Sample paragraph three."
                },
                "body": [
                    {
                        "heading": format!("Why {} Matters", focus),
                        "content": "Sample section.",
                        "subheadings": [
                            { "heading": "The Basics", "content": "Sample content." },
                            { "heading": "Going Further", "content": "Sample content." }
                        ]
                    }
                ],
                "conclusion": format!("That is the short version of {}.", focus)
            })
        };

        Ok(reply.to_string())
    }
}
