use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::types::{ContentSubType, ResultKind};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeywordCategory {
    Focus,
    #[serde(rename = "Short-tail", alias = "Short-Tail", alias = "Short tail")]
    ShortTail,
    #[serde(rename = "Long-tail", alias = "Long-Tail", alias = "Long tail")]
    LongTail,
    Related,
}

impl KeywordCategory {
    pub const ALL: [KeywordCategory; 4] = [
        KeywordCategory::Focus,
        KeywordCategory::ShortTail,
        KeywordCategory::LongTail,
        KeywordCategory::Related,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordCategory::Focus => "Focus",
            KeywordCategory::ShortTail => "Short-tail",
            KeywordCategory::LongTail => "Long-tail",
            KeywordCategory::Related => "Related",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicationLevel {
    #[serde(rename = "Very Important")]
    VeryImportant,
    Important,
    #[serde(rename = "Less Important")]
    LessImportant,
}

impl IndicationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicationLevel::VeryImportant => "Very Important",
            IndicationLevel::Important => "Important",
            IndicationLevel::LessImportant => "Less Important",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordItem {
    pub keyword: String,
    pub category: KeywordCategory,
    pub indication_level: IndicationLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordResearchResult {
    pub strategy_summary: String,
    pub keywords: Vec<KeywordItem>,
}

impl KeywordResearchResult {
    pub fn by_category(&self, category: KeywordCategory) -> impl Iterator<Item = &KeywordItem> {
        self.keywords
            .iter()
            .filter(move |item| item.category == category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    #[serde(alias = "h1")]
    H1,
    #[serde(alias = "h2")]
    H2,
    #[serde(alias = "h3")]
    H3,
}

impl HeadingLevel {
    pub fn depth(&self) -> usize {
        match self {
            HeadingLevel::H1 => 0,
            HeadingLevel::H2 => 1,
            HeadingLevel::H3 => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingItem {
    pub level: HeadingLevel,
    pub text: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordCluster {
    pub short_tail: Vec<String>,
    pub long_tail: Vec<String>,
    pub related: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOptimizationResult {
    pub meta_title: String,
    pub meta_description: String,
    pub keyword_cluster: KeywordCluster,
    pub headings: Vec<HeadingItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMapping {
    pub focus: Vec<String>,
    pub short_tail: Vec<String>,
    pub long_tail: Vec<String>,
    pub related: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub heading: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCopyResult {
    #[serde(rename = "type", default = "product_type")]
    pub content_type: ContentSubType,
    pub keyword_mapping: KeywordMapping,
    pub meta_title: String,
    pub meta_description: String,
    pub intro: String,
    pub marketing_desc: String,
    pub features: Vec<FeatureItem>,
    pub conclusion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Introduction {
    pub para1: String,
    pub para2: String,
    pub para3: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subheading {
    pub heading: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogSection {
    pub heading: String,
    pub content: String,
    #[serde(default)]
    pub subheadings: Vec<Subheading>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogContentResult {
    #[serde(rename = "type", default = "blog_type")]
    pub content_type: ContentSubType,
    pub meta_title: String,
    pub meta_description: String,
    pub introduction: Introduction,
    pub body: Vec<BlogSection>,
    pub conclusion: String,
}

fn product_type() -> ContentSubType {
    ContentSubType::Product
}

fn blog_type() -> ContentSubType {
    ContentSubType::Blog
}

/// One of the four result shapes. Serializes as the bare shape so the JSON
/// matches what the model was asked to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SeoResult {
    KeywordResearch(KeywordResearchResult),
    PageOptimization(PageOptimizationResult),
    ProductCopy(ProductCopyResult),
    BlogContent(BlogContentResult),
}

impl SeoResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            SeoResult::KeywordResearch(_) => ResultKind::KeywordResearch,
            SeoResult::PageOptimization(_) => ResultKind::PageOptimization,
            SeoResult::ProductCopy(_) => ResultKind::ProductCopy,
            SeoResult::BlogContent(_) => ResultKind::BlogContent,
        }
    }

    /// Meta title and description, for the shapes that carry them.
    pub fn meta(&self) -> Option<(&str, &str)> {
        match self {
            SeoResult::KeywordResearch(_) => None,
            SeoResult::PageOptimization(page) => Some((page.meta_title.as_str(), page.meta_description.as_str())),
            SeoResult::ProductCopy(copy) => Some((copy.meta_title.as_str(), copy.meta_description.as_str())),
            SeoResult::BlogContent(blog) => Some((blog.meta_title.as_str(), blog.meta_description.as_str())),
        }
    }

    /// Deserializes `value` as the shape the caller asked for. Missing or
    /// mistyped fields fail the whole parse.
    pub fn parse_as(kind: ResultKind, value: Value) -> Result<Self> {
        let shape_error = |e: serde_json::Error| Error::Shape(format!("{}: {}", kind.title(), e));

        let result = match kind {
            ResultKind::KeywordResearch => {
                SeoResult::KeywordResearch(serde_json::from_value(value).map_err(shape_error)?)
            }
            ResultKind::PageOptimization => {
                SeoResult::PageOptimization(serde_json::from_value(value).map_err(shape_error)?)
            }
            ResultKind::ProductCopy => {
                let copy: ProductCopyResult =
                    serde_json::from_value(value).map_err(shape_error)?;
                if copy.content_type != ContentSubType::Product {
                    return Err(Error::Shape(format!(
                        "expected type \"product\", got \"{}\"",
                        copy.content_type
                    )));
                }
                SeoResult::ProductCopy(copy)
            }
            ResultKind::BlogContent => {
                let blog: BlogContentResult =
                    serde_json::from_value(value).map_err(shape_error)?;
                if blog.content_type != ContentSubType::Blog {
                    return Err(Error::Shape(format!(
                        "expected type \"blog\", got \"{}\"",
                        blog.content_type
                    )));
                }
                SeoResult::BlogContent(blog)
            }
        };
        Ok(result)
    }

    /// Works out which shape `value` is when the caller does not know.
    ///
    /// An explicit `type` of `product` or `blog` wins. Otherwise exactly one
    /// of the required-field sets must be present; zero or several matches
    /// are rejected rather than guessed.
    pub fn detect(value: Value) -> Result<Self> {
        let kind = Self::detect_kind(&value)?;
        Self::parse_as(kind, value)
    }

    pub fn detect_kind(value: &Value) -> Result<ResultKind> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::Shape("expected a JSON object".to_string()))?;

        match object.get("type").and_then(Value::as_str) {
            Some("product") => return Ok(ResultKind::ProductCopy),
            Some("blog") => return Ok(ResultKind::BlogContent),
            _ => {}
        }

        let has = |key: &str| object.contains_key(key);
        let candidates = [
            (ResultKind::KeywordResearch, has("keywords")),
            (
                ResultKind::PageOptimization,
                has("keywordCluster") && has("headings"),
            ),
            (ResultKind::ProductCopy, has("features") && has("intro")),
            (ResultKind::BlogContent, has("introduction") && has("body")),
        ];
        let matched: Vec<ResultKind> = candidates
            .into_iter()
            .filter_map(|(kind, present)| present.then_some(kind))
            .collect();

        match matched.as_slice() {
            [kind] => Ok(*kind),
            [] => Err(Error::Shape(
                "object matches none of the known result shapes".to_string(),
            )),
            several => Err(Error::Shape(format!(
                "object is ambiguous between {:?}",
                several
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for SeoResult {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        SeoResult::detect(value).map_err(serde::de::Error::custom)
    }
}
