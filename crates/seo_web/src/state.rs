use seo_core::FeatureSelector;
use seo_inference::SeoEngine;
use tokio::sync::Mutex;

pub struct AppState {
    pub engine: SeoEngine,
    pub selector: Mutex<FeatureSelector>,
}

impl AppState {
    pub fn new(engine: SeoEngine) -> Self {
        Self {
            engine,
            selector: Mutex::new(FeatureSelector::new()),
        }
    }
}
