use async_trait::async_trait;
use nt_core::{Error, InferenceModel, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::Config;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

/// Groq's OpenAI-compatible chat completions endpoint.
pub struct GroqModel {
    client: Client,
    config: Config,
}

impl GroqModel {
    pub fn new(config: Config) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::Config("Groq API key is required".to_string()));
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/openai/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

impl fmt::Debug for GroqModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqModel")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl InferenceModel for GroqModel {
    fn name(&self) -> &str {
        &self.config.model_name
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model_name,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::status(status.as_u16(), body));
        }

        let response = response.json::<ChatResponse>().await?;
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| Error::Inference("Completion contained no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str) -> Config {
        Config {
            api_key: "gsk-test".to_string(),
            model_name: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.3,
            base_url: base_url.to_string(),
        }
    }

    #[test]
    fn test_model_requires_api_key() {
        let mut config = config("http://localhost");
        config.api_key.clear();
        let err = GroqModel::new(config).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: Groq API key is required");
    }

    #[tokio::test]
    async fn test_complete_sends_single_user_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .and(header("authorization", "Bearer gsk-test"))
            .and(body_partial_json(json!({
                "model": "llama-3.3-70b-versatile",
                "messages": [{"role": "user", "content": "hello"}],
                "temperature": 0.3
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "  world \n"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let model = GroqModel::new(config(&server.uri())).unwrap();
        assert_eq!(model.complete("hello").await.unwrap(), "world");
    }

    #[tokio::test]
    async fn test_complete_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let model = GroqModel::new(config(&server.uri())).unwrap();
        match model.complete("hello").await {
            Err(Error::Status { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_complete_without_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let model = GroqModel::new(config(&server.uri())).unwrap();
        assert!(matches!(model.complete("hello").await, Err(Error::Inference(_))));
    }
}
