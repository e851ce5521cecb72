use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Summary used when the text-generation call fails.
pub const SUMMARY_FALLBACK: &str = "요약 내용을 생성할 수 없습니다.";
/// Publisher label used when the article page yields no name.
pub const PRESS_FALLBACK: &str = "언론사 미상";
/// Tags used when extraction fails or returns no hashtags.
pub const DEFAULT_TAGS: [&str; 2] = ["#피지컬AI", "#AI동향"];

/// A search hit that survived dedup and filtering, with markup already removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawArticle {
    pub title: String,
    pub link: String,
    pub description: String,
    pub published_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedArticle {
    #[serde(flatten)]
    pub article: RawArticle,
    pub summary: String,
    pub publisher: String,
    pub tags: Vec<String>,
}

impl EnrichedArticle {
    pub fn tags_line(&self) -> String {
        self.tags.join(" ")
    }
}

pub fn default_tags() -> Vec<String> {
    DEFAULT_TAGS.iter().map(|t| t.to_string()).collect()
}

/// Links accepted so far in a single run.
#[derive(Debug, Default, Clone)]
pub struct SeenLinks {
    links: HashSet<String>,
}

impl SeenLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, link: &str) -> bool {
        self.links.contains(link)
    }

    /// Returns false if the link was already present.
    pub fn insert(&mut self, link: &str) -> bool {
        self.links.insert(link.to_string())
    }
}
