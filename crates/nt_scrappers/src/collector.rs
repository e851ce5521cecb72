use std::sync::Arc;

use nt_core::{NewsSearch, RawArticle, SearchHit, SeenLinks, Settings};
use tracing::{info, warn};

use crate::scrapers::utils::clean_markup;

#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub keywords: Vec<String>,
    /// Accepted articles per keyword.
    pub display_count: usize,
    /// Hits whose title or description contains this, raw or cleaned, are dropped.
    pub exclude_keyword: String,
}

impl CollectorConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            keywords: settings.keywords.clone(),
            display_count: settings.display_count,
            exclude_keyword: settings.exclude_keyword.clone(),
        }
    }
}

fn contains_term(title: &str, description: &str, exclude: &str) -> bool {
    !exclude.is_empty() && (title.contains(exclude) || description.contains(exclude))
}

/// Accepts hits in the order given until `count` are taken. A hit is skipped
/// if its link is already in `seen` or its text contains `exclude`, either
/// raw or once markup is stripped. Accepted links are added to `seen`.
pub fn accept_hits(
    hits: Vec<SearchHit>,
    count: usize,
    exclude: &str,
    seen: &mut SeenLinks,
) -> Vec<RawArticle> {
    let mut accepted = Vec::with_capacity(count);
    for hit in hits {
        if accepted.len() >= count {
            break;
        }
        if seen.contains(&hit.link) {
            continue;
        }
        if contains_term(&hit.title, &hit.description, exclude) {
            continue;
        }
        // Highlighting can split the term, e.g. "<b>주</b>식".
        let title = clean_markup(&hit.title);
        let description = clean_markup(&hit.description);
        if contains_term(&title, &description, exclude) {
            continue;
        }
        seen.insert(&hit.link);
        accepted.push(RawArticle {
            title,
            link: hit.link,
            description,
            published_at: hit.published_at,
        });
    }
    accepted
}

/// Queries the search provider once per keyword and keeps the deduplicated,
/// filtered hits in keyword order.
pub struct Collector {
    search: Arc<dyn NewsSearch>,
    config: CollectorConfig,
}

impl Collector {
    pub fn new(search: Arc<dyn NewsSearch>, config: CollectorConfig) -> Self {
        Self { search, config }
    }

    pub async fn collect(&self, seen: &mut SeenLinks) -> Vec<RawArticle> {
        let mut articles = Vec::new();
        let request_count = self.config.display_count * 2;

        info!("🔎 Collecting news for {} keywords", self.config.keywords.len());
        for keyword in &self.config.keywords {
            let hits = match self.search.search(keyword, request_count).await {
                Ok(hits) => hits,
                Err(e) => {
                    warn!("⚠️ Search for '{}' failed: {}", keyword, e);
                    continue;
                }
            };
            let received = hits.len();
            let accepted = accept_hits(
                hits,
                self.config.display_count,
                &self.config.exclude_keyword,
                seen,
            );
            info!("📰 '{}': {} accepted of {} results", keyword, accepted.len(), received);
            articles.extend(accepted);
        }
        articles
    }
}
