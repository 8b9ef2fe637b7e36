pub mod busy;
pub mod error;
pub mod logging;
pub mod models;
pub mod quality;
pub mod results;
pub mod selector;
pub mod types;

pub use error::Error;
pub use models::GenerationModel;
pub use results::{
    BlogContentResult, BlogSection, FeatureItem, HeadingItem, HeadingLevel, IndicationLevel,
    Introduction, KeywordCategory, KeywordCluster, KeywordItem, KeywordMapping,
    KeywordResearchResult, PageOptimizationResult, ProductCopyResult, SeoResult, Subheading,
};
pub use selector::{FeatureSelector, SelectorSnapshot, Ticket};
pub use types::{ContentSubType, Feature, Generation, GenerationRequest, ResultKind, SeoRequest};

pub type Result<T> = std::result::Result<T, Error>;
