use async_trait::async_trait;

use crate::Result;

/// One unprocessed hit from the search provider. Title and description may
/// still contain inline markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub link: String,
    pub description: String,
    pub published_at: String,
}

#[async_trait]
pub trait NewsSearch: Send + Sync {
    /// Returns up to `display` hits for `query`, newest first.
    async fn search(&self, query: &str, display: usize) -> Result<Vec<SearchHit>>;
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the raw document text at `url`.
    async fn fetch(&self, url: &str) -> Result<String>;
}
