use async_trait::async_trait;
use std::fmt;

use crate::Result;

/// A single-turn text-generation backend.
#[async_trait]
pub trait InferenceModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Sends `prompt` as one user message and returns the completion text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
