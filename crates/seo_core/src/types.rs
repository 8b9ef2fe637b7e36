use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::results::SeoResult;
use crate::{Error, Result};

/// The three tabs of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Feature {
    #[default]
    KeywordResearch,
    PageOptimization,
    ContentEngine,
}

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::KeywordResearch,
        Feature::PageOptimization,
        Feature::ContentEngine,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Feature::KeywordResearch => "Keyword Research",
            Feature::PageOptimization => "Page Blueprint",
            Feature::ContentEngine => "Content Engine",
        }
    }

    /// Message shown when a required field is blank.
    pub fn validation_message(&self, sub_type: ContentSubType) -> &'static str {
        match (self, sub_type) {
            (Feature::KeywordResearch, _) => {
                "Please provide both Domain Name and Short Description."
            }
            (Feature::PageOptimization, _) => "All fields are required for page optimization.",
            (Feature::ContentEngine, ContentSubType::Product) => {
                "Product Name, Description, and Focus Keyword are required."
            }
            (Feature::ContentEngine, ContentSubType::Blog) => {
                "Focus Keyword is required for blog content."
            }
        }
    }

    /// Message shown for any transport, endpoint or parse failure.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Feature::KeywordResearch => "Failed to generate keywords. Please try again.",
            Feature::PageOptimization => "Failed to optimize page. Please try again.",
            Feature::ContentEngine => {
                "Failed to generate content. The AI engine might be busy, please try again."
            }
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Content engine mode. Only meaningful for [`Feature::ContentEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSubType {
    #[default]
    #[serde(alias = "PRODUCT")]
    Product,
    #[serde(alias = "BLOG")]
    Blog,
}

impl fmt::Display for ContentSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSubType::Product => f.write_str("product"),
            ContentSubType::Blog => f.write_str("blog"),
        }
    }
}

/// Which of the four result shapes a request expects back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultKind {
    KeywordResearch,
    PageOptimization,
    ProductCopy,
    BlogContent,
}

impl ResultKind {
    /// Banner text used when rendering a result.
    pub fn title(&self) -> &'static str {
        match self {
            ResultKind::KeywordResearch => "KEYWORD RESEARCH",
            ResultKind::PageOptimization => "PAGE BLUEPRINT",
            ResultKind::ProductCopy => "PRODUCT COPY",
            ResultKind::BlogContent => "CONTENT ENGINE",
        }
    }
}

/// A fully populated generation request. Each variant carries exactly the
/// fields its prompt template interpolates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "camelCase")]
pub enum SeoRequest {
    #[serde(rename_all = "camelCase")]
    KeywordResearch { domain: String, description: String },
    #[serde(rename_all = "camelCase")]
    PageOptimization {
        domain: String,
        focus_keyword: String,
        description: String,
    },
    #[serde(rename_all = "camelCase")]
    ProductCopy {
        product_name: String,
        description: String,
        focus_keyword: String,
    },
    #[serde(rename_all = "camelCase")]
    BlogContent { focus_keyword: String },
}

impl SeoRequest {
    /// Builds a request from named form fields (`domain`, `description`,
    /// `focusKeyword`, `productName`). Fields the feature does not use are
    /// ignored.
    pub fn from_fields(
        feature: Feature,
        sub_type: ContentSubType,
        fields: &HashMap<String, String>,
    ) -> Result<Self> {
        let field = |name: &str| fields.get(name).cloned().unwrap_or_default();

        let request = match (feature, sub_type) {
            (Feature::KeywordResearch, _) => SeoRequest::KeywordResearch {
                domain: field("domain"),
                description: field("description"),
            },
            (Feature::PageOptimization, _) => SeoRequest::PageOptimization {
                domain: field("domain"),
                focus_keyword: field("focusKeyword"),
                description: field("description"),
            },
            (Feature::ContentEngine, ContentSubType::Product) => SeoRequest::ProductCopy {
                product_name: field("productName"),
                description: field("description"),
                focus_keyword: field("focusKeyword"),
            },
            (Feature::ContentEngine, ContentSubType::Blog) => SeoRequest::BlogContent {
                focus_keyword: field("focusKeyword"),
            },
        };

        request.validate()?;
        Ok(request)
    }

    pub fn feature(&self) -> Feature {
        match self {
            SeoRequest::KeywordResearch { .. } => Feature::KeywordResearch,
            SeoRequest::PageOptimization { .. } => Feature::PageOptimization,
            SeoRequest::ProductCopy { .. } | SeoRequest::BlogContent { .. } => {
                Feature::ContentEngine
            }
        }
    }

    pub fn sub_type(&self) -> Option<ContentSubType> {
        match self {
            SeoRequest::ProductCopy { .. } => Some(ContentSubType::Product),
            SeoRequest::BlogContent { .. } => Some(ContentSubType::Blog),
            _ => None,
        }
    }

    pub fn result_kind(&self) -> ResultKind {
        match self {
            SeoRequest::KeywordResearch { .. } => ResultKind::KeywordResearch,
            SeoRequest::PageOptimization { .. } => ResultKind::PageOptimization,
            SeoRequest::ProductCopy { .. } => ResultKind::ProductCopy,
            SeoRequest::BlogContent { .. } => ResultKind::BlogContent,
        }
    }

    /// Rejects the request if any field the template references is blank.
    pub fn validate(&self) -> Result<()> {
        let required: Vec<&String> = match self {
            SeoRequest::KeywordResearch {
                domain,
                description,
            } => vec![domain, description],
            SeoRequest::PageOptimization {
                domain,
                focus_keyword,
                description,
            } => vec![domain, focus_keyword, description],
            SeoRequest::ProductCopy {
                product_name,
                description,
                focus_keyword,
            } => vec![product_name, description, focus_keyword],
            SeoRequest::BlogContent { focus_keyword } => vec![focus_keyword],
        };

        if required.iter().any(|value| value.trim().is_empty()) {
            let sub_type = self.sub_type().unwrap_or_default();
            return Err(Error::Validation(
                self.feature().validation_message(sub_type).to_string(),
            ));
        }
        Ok(())
    }
}

/// What is sent to a generation backend for a single call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: String,
    pub response_mime_type: String,
}

impl GenerationRequest {
    pub fn json(prompt: impl Into<String>, system_instruction: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: system_instruction.into(),
            response_mime_type: "application/json".to_string(),
        }
    }
}

/// A parsed result plus where and when it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Generation {
    pub result: SeoResult,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_fields_builds_each_variant() {
        let request = SeoRequest::from_fields(
            Feature::KeywordResearch,
            ContentSubType::default(),
            &fields(&[
                ("domain", "techgear.com"),
                ("description", "sells ergonomic office furniture"),
            ]),
        )
        .unwrap();
        assert_eq!(request.result_kind(), ResultKind::KeywordResearch);

        let request = SeoRequest::from_fields(
            Feature::ContentEngine,
            ContentSubType::Blog,
            &fields(&[("focusKeyword", "intermittent fasting"), ("domain", "ignored")]),
        )
        .unwrap();
        assert_eq!(
            request,
            SeoRequest::BlogContent {
                focus_keyword: "intermittent fasting".to_string()
            }
        );
        assert_eq!(request.feature(), Feature::ContentEngine);
        assert_eq!(request.sub_type(), Some(ContentSubType::Blog));
    }

    #[test]
    fn test_missing_fields_report_feature_message() {
        let err = SeoRequest::from_fields(
            Feature::KeywordResearch,
            ContentSubType::default(),
            &fields(&[("domain", "techgear.com")]),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please provide both Domain Name and Short Description."
        );

        let err = SeoRequest::from_fields(
            Feature::PageOptimization,
            ContentSubType::default(),
            &fields(&[("domain", "a.com"), ("focusKeyword", "   "), ("description", "d")]),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "All fields are required for page optimization.");

        let err = SeoRequest::from_fields(
            Feature::ContentEngine,
            ContentSubType::Product,
            &fields(&[("productName", "ErgoLift X1")]),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Product Name, Description, and Focus Keyword are required."
        );

        let err = SeoRequest::from_fields(Feature::ContentEngine, ContentSubType::Blog, &fields(&[]))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_feature_serde_names() {
        assert_eq!(
            serde_json::to_string(&Feature::PageOptimization).unwrap(),
            "\"PAGE_OPTIMIZATION\""
        );
        let sub: ContentSubType = serde_json::from_str("\"BLOG\"").unwrap();
        assert_eq!(sub, ContentSubType::Blog);
        let sub: ContentSubType = serde_json::from_str("\"product\"").unwrap();
        assert_eq!(sub, ContentSubType::Product);
    }

    #[test]
    fn test_generation_request_asks_for_json() {
        let request = GenerationRequest::json("prompt", "system");
        assert_eq!(request.response_mime_type, "application/json");
    }
}
