use async_trait::async_trait;
use nt_core::types::PRESS_FALLBACK;
use nt_core::{PageFetcher, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::utils;

pub const PAGE_TIMEOUT: Duration = Duration::from_secs(5);
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Title separators tried in order; the text after the last occurrence of the
/// first one present is taken as the publisher.
const TITLE_SEPARATORS: [&str; 3] = [" - ", " : ", " | "];

/// Fetches article pages with a browser user agent and a short timeout.
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(PAGE_TIMEOUT)
            .user_agent(BROWSER_USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let url = utils::parse_url(url)?;
        let response = self.client.get(url.clone()).send().await?;
        debug!("GET {} -> {}", url, response.status());
        // Pages are decoded as UTF-8 regardless of the declared charset.
        let bytes = response.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty())
        .map(str::to_string)
}

fn title_suffix(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let title = document.select(&selector).next()?.text().collect::<String>();
    let separator = TITLE_SEPARATORS.iter().find(|sep| title.contains(**sep))?;
    title
        .rsplit(separator)
        .next()
        .map(str::trim)
        .filter(|press| !press.is_empty())
        .map(str::to_string)
}

/// Publisher name from page metadata: `og:site_name`, then `twitter:site`,
/// then the trailing segment of the `<title>`.
pub fn extract_press(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    meta_content(&document, "meta[property='og:site_name']")
        .or_else(|| meta_content(&document, "meta[name='twitter:site']"))
        .or_else(|| title_suffix(&document))
}

pub struct PressDetector {
    fetcher: Arc<dyn PageFetcher>,
}

impl PressDetector {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// `Ok(None)` when the page was fetched but names no publisher; `Err` when
    /// the page could not be fetched.
    pub async fn detect(&self, link: &str) -> Result<Option<String>> {
        let html = self.fetcher.fetch(link).await?;
        Ok(extract_press(&html))
    }

    /// Publisher label for the report, never failing.
    pub async fn press_name(&self, link: &str) -> String {
        match self.detect(link).await {
            Ok(Some(press)) => press,
            Ok(None) => {
                debug!("No publisher metadata on {}", link);
                PRESS_FALLBACK.to_string()
            }
            Err(e) => {
                warn!("⚠️ Could not fetch {} for publisher lookup: {}", link, e);
                PRESS_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nt_core::Error;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_og_site_name_wins() {
        let html = r#"<html><head>
            <meta name="twitter:site" content="@press">
            <meta property="og:site_name" content=" 전북일보 ">
            <title>기사 - 다른곳</title>
        </head></html>"#;
        assert_eq!(extract_press(html), Some("전북일보".to_string()));
    }

    #[test]
    fn test_twitter_site_fallback() {
        let html = r#"<html><head>
            <meta property="og:site_name" content="  ">
            <meta name="twitter:site" content="@aitimes">
        </head></html>"#;
        assert_eq!(extract_press(html), Some("@aitimes".to_string()));
    }

    #[test]
    fn test_title_separator_fallback() {
        let html = "<html><head><title>전북 피지컬 AI 실증 - 1부 - 뉴스1</title></head></html>";
        assert_eq!(extract_press(html), Some("뉴스1".to_string()));

        let html = "<html><head><title>로봇 산업 | 전자신문</title></head></html>";
        assert_eq!(extract_press(html), Some("전자신문".to_string()));

        // " - " is preferred even when " | " appears later.
        let html = "<html><head><title>A | B - 연합뉴스</title></head></html>";
        assert_eq!(extract_press(html), Some("연합뉴스".to_string()));
    }

    #[test]
    fn test_no_metadata() {
        assert_eq!(extract_press("<html><head><title>제목만</title></head></html>"), None);
        assert_eq!(extract_press("<html><head><title>제목 - </title></head></html>"), None);
        assert_eq!(extract_press(""), None);
    }

    struct FailingFetcher;

    #[async_trait]
    impl PageFetcher for FailingFetcher {
        async fn fetch(&self, _url: &str) -> Result<String> {
            Err(Error::Scraping("connection reset".to_string()))
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_is_distinguished_then_defaulted() {
        let detector = PressDetector::new(Arc::new(FailingFetcher));
        assert!(detector.detect("https://x.example").await.is_err());
        assert_eq!(detector.press_name("https://x.example").await, PRESS_FALLBACK);
    }

    #[tokio::test]
    async fn test_http_fetcher_sends_browser_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/article/1"))
            .and(header("user-agent", BROWSER_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<html><head><meta property="og:site_name" content="AI타임스"></head></html>"#,
            ))
            .mount(&server)
            .await;

        let detector = PressDetector::new(Arc::new(HttpPageFetcher::new().unwrap()));
        let link = format!("{}/article/1", server.uri());
        assert_eq!(detector.detect(&link).await.unwrap(), Some("AI타임스".to_string()));
    }

    #[tokio::test]
    async fn test_slow_page_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<title>x - 늦은신문</title>")
                    .set_delay(PAGE_TIMEOUT + Duration::from_secs(1)),
            )
            .mount(&server)
            .await;

        let detector = PressDetector::new(Arc::new(HttpPageFetcher::new().unwrap()));
        let link = format!("{}/slow", server.uri());
        assert!(detector.detect(&link).await.is_err());
        assert_eq!(detector.press_name(&link).await, PRESS_FALLBACK);
    }

    #[tokio::test]
    async fn test_invalid_link() {
        let detector = PressDetector::new(Arc::new(HttpPageFetcher::new().unwrap()));
        assert_eq!(detector.press_name("not a url").await, PRESS_FALLBACK);
    }
}
