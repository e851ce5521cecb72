use async_trait::async_trait;
use nt_core::{Error, NewsSearch, Result, SearchHit};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

pub const NAVER_BASE_URL: &str = "https://openapi.naver.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct Item {
    title: String,
    link: String,
    #[serde(default)]
    description: String,
    #[serde(default, rename = "pubDate")]
    pub_date: String,
}

impl From<Item> for SearchHit {
    fn from(item: Item) -> Self {
        SearchHit {
            title: item.title,
            link: item.link,
            description: item.description,
            published_at: item.pub_date,
        }
    }
}

/// Naver news search, newest first.
pub struct NaverSearch {
    client: Client,
    client_id: String,
    client_secret: String,
    base_url: String,
}

impl NaverSearch {
    pub fn new(client_id: &str, client_secret: &str) -> Result<Self> {
        Self::with_base_url(client_id, client_secret, NAVER_BASE_URL)
    }

    pub fn with_base_url(client_id: &str, client_secret: &str, base_url: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl fmt::Debug for NaverSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaverSearch")
            .field("client_id", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl NewsSearch for NaverSearch {
    async fn search(&self, query: &str, display: usize) -> Result<Vec<SearchHit>> {
        let display = display.to_string();
        let response = self
            .client
            .get(format!("{}/v1/search/news.json", self.base_url))
            .header("X-Naver-Client-Id", &self.client_id)
            .header("X-Naver-Client-Secret", &self.client_secret)
            .query(&[("query", query), ("display", display.as_str()), ("sort", "date")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Search(format!("status {}: {}", status.as_u16(), body)));
        }

        let response = response.json::<SearchResponse>().await?;
        Ok(response.items.into_iter().map(SearchHit::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_search_maps_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search/news.json"))
            .and(query_param("query", "피지컬 AI"))
            .and(query_param("display", "6"))
            .and(query_param("sort", "date"))
            .and(header("X-Naver-Client-Id", "id"))
            .and(header("X-Naver-Client-Secret", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "lastBuildDate": "Fri, 16 Oct 2026 09:00:00 +0900",
                "total": 1,
                "start": 1,
                "display": 1,
                "items": [{
                    "title": "<b>피지컬 AI</b> 실증",
                    "originallink": "https://press.example/a",
                    "link": "https://n.news.naver.com/a",
                    "description": "&quot;로봇&quot;",
                    "pubDate": "Fri, 16 Oct 2026 08:00:00 +0900"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let search = NaverSearch::with_base_url("id", "secret", &server.uri()).unwrap();
        let hits = search.search("피지컬 AI", 6).await.unwrap();
        assert_eq!(
            hits,
            vec![SearchHit {
                title: "<b>피지컬 AI</b> 실증".to_string(),
                link: "https://n.news.naver.com/a".to_string(),
                description: "&quot;로봇&quot;".to_string(),
                published_at: "Fri, 16 Oct 2026 08:00:00 +0900".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Authentication failed"))
            .mount(&server)
            .await;

        let search = NaverSearch::with_base_url("id", "bad", &server.uri()).unwrap();
        let err = search.search("AI", 6).await.unwrap_err();
        assert!(matches!(err, Error::Search(_)));
        assert!(err.to_string().contains("401"));
    }
}
