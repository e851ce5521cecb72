use async_trait::async_trait;
use nt_core::{Block, DocumentStore, Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

pub const NOTION_BASE_URL: &str = "https://api.notion.com";
pub const NOTION_VERSION: &str = "2022-06-28";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct AppendRequest<'a> {
    children: &'a [Block],
}

#[derive(Deserialize)]
struct AppendResponse {
    results: Vec<CreatedBlock>,
}

#[derive(Deserialize)]
struct CreatedBlock {
    id: String,
}

/// Notion block-children API.
pub struct NotionStorage {
    client: Client,
    token: String,
    base_url: String,
}

impl NotionStorage {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, NOTION_BASE_URL)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::Config("Notion token is required".to_string()));
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            token: token.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl fmt::Debug for NotionStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionStorage")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl DocumentStore for NotionStorage {
    async fn append_children(&self, parent_id: &str, children: &[Block]) -> Result<Vec<String>> {
        let url = format!("{}/v1/blocks/{}/children", self.base_url, parent_id);
        debug!("PATCH {} ({} blocks)", url, children.len());

        let response = self
            .client
            .patch(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&AppendRequest { children })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::status(status.as_u16(), body));
        }

        let response = response.json::<AppendResponse>().await?;
        Ok(response.results.into_iter().map(|block| block.id).collect())
    }
}
