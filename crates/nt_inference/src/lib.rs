use nt_core::Settings;

pub mod analysis;
pub mod models;

pub const GROQ_BASE_URL: &str = "https://api.groq.com";

/// Connection settings for the text-generation backend.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model_name: String,
    pub temperature: f32,
    pub base_url: String,
}

impl Config {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            api_key: settings.groq_api_key.clone(),
            model_name: settings.model.clone(),
            temperature: settings.temperature,
            base_url: GROQ_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .finish()
    }
}

pub mod prelude {
    pub use super::analysis::ArticleAnalyzer;
    pub use super::models::create_model;
    pub use super::Config;
    pub use nt_core::{Error, InferenceModel, Result};
}

pub use analysis::ArticleAnalyzer;
pub use models::create_model;
