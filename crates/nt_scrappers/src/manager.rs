use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::join_all;
use nt_core::{EnrichedArticle, Error, RawArticle, Result, SeenLinks};
use nt_inference::ArticleAnalyzer;
use nt_storage::{PublishOutcome, Report, ReportPublisher};
use tokio::sync::Semaphore;
use tracing::info;

use crate::collector::Collector;
use crate::scrapers::press::PressDetector;

/// What one pipeline run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub fetched: usize,
    pub enriched: usize,
    pub outcome: PublishOutcome,
}

impl RunReport {
    fn empty() -> Self {
        Self {
            fetched: 0,
            enriched: 0,
            outcome: PublishOutcome::Skipped,
        }
    }
}

fn short_title(title: &str) -> String {
    title.chars().take(30).collect()
}

/// Runs collect, enrich and publish for one report.
pub struct NewsManager {
    collector: Collector,
    analyzer: Arc<ArticleAnalyzer>,
    press: Arc<PressDetector>,
    publisher: ReportPublisher,
    semaphore: Arc<Semaphore>,
}

impl NewsManager {
    pub fn new(
        collector: Collector,
        analyzer: ArticleAnalyzer,
        press: PressDetector,
        publisher: ReportPublisher,
        concurrency: usize,
    ) -> Self {
        Self {
            collector,
            analyzer: Arc::new(analyzer),
            press: Arc::new(press),
            publisher,
            semaphore: Arc::new(Semaphore::new(concurrency.max(1))),
        }
    }

    /// Summary, publisher and tags for one article. Each lookup falls back on
    /// its own, so the article is always returned.
    pub async fn enrich(&self, article: RawArticle) -> EnrichedArticle {
        let (summary, publisher, tags) = tokio::join!(
            self.analyzer.summarize(&article.title, &article.description),
            self.press.press_name(&article.link),
            self.analyzer.extract_tags(&article.title, &article.description),
        );
        EnrichedArticle {
            article,
            summary,
            publisher,
            tags,
        }
    }

    /// Enriches every article with at most `concurrency` in flight. Output
    /// order matches input order.
    pub async fn enrich_all(&self, articles: Vec<RawArticle>) -> Result<Vec<EnrichedArticle>> {
        let total = articles.len();
        let futures = articles.into_iter().enumerate().map(|(i, article)| {
            let semaphore = self.semaphore.clone();
            async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| Error::External(e.into()))?;
                info!("🤖 [{}/{}] Processing: {}...", i + 1, total, short_title(&article.title));
                Ok::<_, Error>(self.enrich(article).await)
            }
        });
        join_all(futures).await.into_iter().collect()
    }

    pub async fn run(&self, date: NaiveDate) -> Result<RunReport> {
        let mut seen = SeenLinks::new();
        let articles = self.collector.collect(&mut seen).await;
        if articles.is_empty() {
            info!("📭 No new articles found");
            return Ok(RunReport::empty());
        }

        let fetched = articles.len();
        info!("✨ Collected {} articles, enriching...", fetched);
        let enriched = self.enrich_all(articles).await?;

        let report = Report::new(date, &enriched);
        let outcome = self.publisher.publish(&report).await?;

        Ok(RunReport {
            fetched,
            enriched: enriched.len(),
            outcome,
        })
    }
}
