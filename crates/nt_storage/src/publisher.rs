use std::sync::Arc;

use nt_core::{DocumentStore, Error, Result};
use tracing::{error, info, warn};

use crate::report::Report;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Nothing to send; no write was made.
    Skipped,
    Published { container_id: String, blocks: usize },
}

/// Writes a report under a target page in two ordered steps: create the dated
/// toggle, then append the report body into it.
pub struct ReportPublisher {
    store: Arc<dyn DocumentStore>,
    page_id: String,
}

impl ReportPublisher {
    pub fn new(store: Arc<dyn DocumentStore>, page_id: impl Into<String>) -> Self {
        Self {
            store,
            page_id: page_id.into(),
        }
    }

    pub async fn publish(&self, report: &Report) -> Result<PublishOutcome> {
        if report.is_empty() {
            info!("📭 No articles to send, skipping report {}", report.title);
            return Ok(PublishOutcome::Skipped);
        }

        info!("📝 Writing report '{}' to page {}", report.title, self.page_id);
        let container_id = self.create_container(report).await?;
        info!("✨ Report toggle created (ID: {})", container_id);

        let body = report.body();
        if let Err(e) = self.store.append_children(&container_id, &body).await {
            error!("❌ Failed to append report blocks: {}", e);
            warn!(
                "⚠️ Toggle {} for report {} was left empty on page {}",
                container_id, report.title, self.page_id
            );
            return Err(e);
        }

        info!("✅ Report {} sent ({} blocks)", report.title, body.len());
        Ok(PublishOutcome::Published {
            container_id,
            blocks: body.len(),
        })
    }

    async fn create_container(&self, report: &Report) -> Result<String> {
        let ids = match self
            .store
            .append_children(&self.page_id, &[report.container()])
            .await
        {
            Ok(ids) => ids,
            Err(e) => {
                error!("❌ Failed to create report toggle: {}", e);
                return Err(e);
            }
        };

        match ids.as_slice() {
            [id] => Ok(id.clone()),
            _ => {
                error!("❌ Expected one created toggle, store returned {} ids", ids.len());
                Err(Error::Storage(format!(
                    "expected exactly one created block, got {}",
                    ids.len()
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::memory::MemoryStorage;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use nt_core::{Block, EnrichedArticle, RawArticle};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn items(n: usize) -> Vec<EnrichedArticle> {
        (0..n)
            .map(|i| EnrichedArticle {
                article: RawArticle {
                    title: format!("t{}", i),
                    link: format!("https://n.example/{}", i),
                    description: String::new(),
                    published_at: String::new(),
                },
                summary: "s".to_string(),
                publisher: "p".to_string(),
                tags: vec!["#a".to_string()],
            })
            .collect()
    }

    #[tokio::test]
    async fn test_empty_report_makes_no_writes() {
        let store = MemoryStorage::new();
        let publisher = ReportPublisher::new(Arc::new(store.clone()), "page");
        let outcome = publisher.publish(&Report::new(date(), &[])).await.unwrap();
        assert_eq!(outcome, PublishOutcome::Skipped);
        assert!(store.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_two_phase_write() {
        let store = MemoryStorage::new();
        let publisher = ReportPublisher::new(Arc::new(store.clone()), "page");
        let outcome = publisher.publish(&Report::new(date(), &items(2))).await.unwrap();
        assert_eq!(
            outcome,
            PublishOutcome::Published {
                container_id: "memory-0-0".to_string(),
                blocks: 9,
            }
        );

        let calls = store.calls().await;
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].parent_id, "page");
        assert_eq!(calls[0].children, vec![Block::toggle("20261016")]);
        assert_eq!(calls[1].parent_id, "memory-0-0");
        assert_eq!(calls[1].children.len(), 9);
        assert_eq!(calls[1].children[0], Block::Divider);
    }

    #[tokio::test]
    async fn test_container_failure_stops_before_content() {
        let store = MemoryStorage::failing_at(0, 401);
        let publisher = ReportPublisher::new(Arc::new(store.clone()), "page");
        let err = publisher.publish(&Report::new(date(), &items(1))).await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 401, .. }));
        assert_eq!(store.calls().await.len(), 1);
    }

    #[tokio::test]
    async fn test_content_failure_is_reported() {
        let store = MemoryStorage::failing_at(1, 400);
        let publisher = ReportPublisher::new(Arc::new(store.clone()), "page");
        let err = publisher.publish(&Report::new(date(), &items(1))).await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 400, .. }));
        assert_eq!(store.calls().await.len(), 2);
    }

    struct NoIdStore;

    #[async_trait]
    impl DocumentStore for NoIdStore {
        async fn append_children(&self, _parent_id: &str, _children: &[Block]) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_missing_container_id_is_an_error() {
        let publisher = ReportPublisher::new(Arc::new(NoIdStore), "page");
        let err = publisher.publish(&Report::new(date(), &items(1))).await.unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
    }
}
