use std::fmt;

pub mod engine;
pub mod models;
pub mod prompts;

pub const API_KEY_ENV: &str = "API_KEY";
pub const MODEL_NAME_ENV: &str = "GEMINI_MODEL";
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";
pub const PROVIDER_ENV: &str = "SEO_MODEL";

#[derive(Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub base_url: Option<String>,
    /// Backend to use: `gemini` (default) or `dummy`.
    pub provider: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .field("provider", &self.provider)
            .finish()
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            api_key: non_empty(API_KEY_ENV),
            model_name: non_empty(MODEL_NAME_ENV),
            base_url: non_empty(BASE_URL_ENV),
            provider: non_empty(PROVIDER_ENV),
        }
    }
}

pub mod prelude {
    pub use super::engine::{clean_json_output, SeoEngine};
    pub use super::models::create_model;
    pub use super::prompts::{build_request, PromptPair, SYSTEM_INSTRUCTION};
    pub use super::Config;
    pub use seo_core::{Error, Generation, Result, SeoRequest, SeoResult};
}

pub use engine::SeoEngine;
pub use models::create_model;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_from_lookup() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-2.5-flash"),
            ("GEMINI_BASE_URL", "  "),
        ]);
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model_name.as_deref(), Some("gemini-2.5-flash"));
        assert_eq!(config.base_url, None);
        assert_eq!(config.provider, None);
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
