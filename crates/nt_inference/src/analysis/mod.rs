use std::fmt;
use std::sync::Arc;

use nt_core::types::{default_tags, SUMMARY_FALLBACK};
use nt_core::{Error, InferenceModel, Result};
use tracing::warn;

/// Builds the summary and hashtag prompts for an article and applies the
/// fallback values when the model call fails.
pub struct ArticleAnalyzer {
    model: Arc<dyn InferenceModel>,
}

impl fmt::Debug for ArticleAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArticleAnalyzer")
            .field("model", &self.model.name())
            .finish()
    }
}

pub fn summary_prompt(title: &str, description: &str) -> String {
    format!(
        "너는 기업 경영지원팀의 뉴스 요약 전문가야. 다음 뉴스 내용을 바탕으로 보고용 3줄 요약을 작성해줘.\n\
         규칙:\n\
         1. 한국어로 작성.\n\
         2. 인사말 생략, 본론만.\n\
         3. 특수문자 최소화.\n\
         4. 각 줄은 명확한 문장으로.\n\
         5. 줄 바꿈 하지말고 띄어쓰기로 줄을 구분해줘.\n\n\
         제목: {}\n\
         내용: {}",
        title, description
    )
}

pub fn tags_prompt(title: &str, description: &str) -> String {
    format!(
        "다음 뉴스 내용에서 핵심 키워드 2~3개를 추출해줘.\n\
         규칙:\n\
         1. 한국어로 작성.\n\
         2. 각 키워드는 '#' 기호와 함께 해시태그 형식으로.\n\
         3. 키워드는 공백으로 구분.\n\
         4. 예시: #전북 #피지컬AI #실증센터 #NIPA #전북테크노파크\n\
         5. 다른 설명 없이 해시태그만 출력.\n\n\
         제목: {}\n\
         내용: {}",
        title, description
    )
}

/// Keeps the `#` tokens of a tag response in order. Returns `None` when the
/// response has no hashtag at all.
pub fn parse_tags(response: &str) -> Option<Vec<String>> {
    if !response.contains('#') {
        return None;
    }
    let tags: Vec<String> = response
        .split_whitespace()
        .filter(|token| token.starts_with('#'))
        .map(|token| token.trim_end_matches([',', '.']).to_string())
        .filter(|token| token.len() > 1)
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

impl ArticleAnalyzer {
    pub fn new(model: Arc<dyn InferenceModel>) -> Self {
        Self { model }
    }

    pub async fn try_summarize(&self, title: &str, description: &str) -> Result<String> {
        let summary = self.model.complete(&summary_prompt(title, description)).await?;
        if summary.trim().is_empty() {
            return Err(Error::Inference("Model returned an empty summary".to_string()));
        }
        Ok(summary.trim().to_string())
    }

    pub async fn try_extract_tags(&self, title: &str, description: &str) -> Result<Vec<String>> {
        let response = self.model.complete(&tags_prompt(title, description)).await?;
        parse_tags(&response)
            .ok_or_else(|| Error::Inference(format!("No hashtags in response: {:?}", response)))
    }

    /// Three-sentence summary, or the fixed apology text on any failure.
    pub async fn summarize(&self, title: &str, description: &str) -> String {
        match self.try_summarize(title, description).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("⚠️ Summary generation failed: {}", e);
                SUMMARY_FALLBACK.to_string()
            }
        }
    }

    /// Hashtag keywords, or the default pair on any failure.
    pub async fn extract_tags(&self, title: &str, description: &str) -> Vec<String> {
        match self.try_extract_tags(title, description).await {
            Ok(tags) => tags,
            Err(e) => {
                warn!("⚠️ Keyword extraction failed: {}", e);
                default_tags()
            }
        }
    }
}
