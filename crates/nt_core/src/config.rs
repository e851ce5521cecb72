use std::str::FromStr;

use crate::{Error, Result};

pub const DEFAULT_KEYWORDS: [&str; 5] = [
    "피지컬 AI",
    "전북 피지컬 AI",
    "전북테크노파크",
    "경남 피지컬 AI",
    "NIPA 피지컬 AI",
];
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_SCHEDULE: &str = "0 0 9 * * Mon-Fri";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Notion,
    /// Logs the report instead of sending it.
    Memory,
}

impl FromStr for StoreKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "notion" => Ok(StoreKind::Notion),
            "memory" => Ok(StoreKind::Memory),
            other => Err(Error::Config(format!(
                "Unknown DOCUMENT_STORE '{}'. Must be 'notion' or 'memory'",
                other
            ))),
        }
    }
}

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct Settings {
    pub naver_client_id: String,
    pub naver_client_secret: String,
    pub groq_api_key: String,
    pub notion_token: String,
    pub notion_page_id: String,
    pub keywords: Vec<String>,
    pub display_count: usize,
    pub exclude_keyword: String,
    pub model: String,
    pub temperature: f32,
    pub enrich_concurrency: usize,
    pub schedule: String,
    pub store: StoreKind,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("naver_client_id", &"<redacted>")
            .field("naver_client_secret", &"<redacted>")
            .field("groq_api_key", &"<redacted>")
            .field("notion_token", &"<redacted>")
            .field("notion_page_id", &self.notion_page_id)
            .field("keywords", &self.keywords)
            .field("display_count", &self.display_count)
            .field("exclude_keyword", &self.exclude_keyword)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("enrich_concurrency", &self.enrich_concurrency)
            .field("schedule", &self.schedule)
            .field("store", &self.store)
            .finish()
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| Error::Config(format!("{} must be set", key)))
        };

        let store = match get("DOCUMENT_STORE") {
            Some(value) => value.parse()?,
            None => StoreKind::Notion,
        };

        let (notion_token, notion_page_id) = match store {
            StoreKind::Notion => (required("NOTION_TOKEN")?, required("NOTION_PAGE_ID")?),
            StoreKind::Memory => (
                get("NOTION_TOKEN").unwrap_or_default(),
                get("NOTION_PAGE_ID").unwrap_or_else(|| "memory".to_string()),
            ),
        };

        let keywords = match get("NEWS_KEYWORDS") {
            Some(raw) => parse_keywords(&raw)?,
            None => DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        };

        let display_count = parse_or(&get, "NEWS_DISPLAY_COUNT", 3usize)?;
        if display_count == 0 {
            return Err(Error::Config("NEWS_DISPLAY_COUNT must be at least 1".to_string()));
        }

        let enrich_concurrency = parse_or(&get, "ENRICH_CONCURRENCY", 4usize)?;
        if enrich_concurrency == 0 {
            return Err(Error::Config("ENRICH_CONCURRENCY must be at least 1".to_string()));
        }

        Ok(Self {
            naver_client_id: required("NAVER_CLIENT_ID")?,
            naver_client_secret: required("NAVER_CLIENT_SECRET")?,
            groq_api_key: required("GROQ_API_KEY")?,
            notion_token,
            notion_page_id,
            keywords,
            display_count,
            exclude_keyword: get("NEWS_EXCLUDE_KEYWORD").unwrap_or_else(|| "주식".to_string()),
            model: get("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: parse_or(&get, "GROQ_TEMPERATURE", 0.3f32)?,
            enrich_concurrency,
            schedule: get("REPORT_SCHEDULE").unwrap_or_else(|| DEFAULT_SCHEDULE.to_string()),
            store,
        })
    }
}

fn parse_or<G, T>(get: &G, key: &str, default: T) -> Result<T>
where
    G: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get(key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| Error::Config(format!("Invalid {} '{}': {}", key, raw, e))),
        None => Ok(default),
    }
}

fn parse_keywords(raw: &str) -> Result<Vec<String>> {
    let keywords: Vec<String> = raw
        .split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        return Err(Error::Config("NEWS_KEYWORDS contains no keywords".to_string()));
    }
    Ok(keywords)
}
