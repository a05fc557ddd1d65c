use crate::types::{Answer, LengthBounds};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model did not respond within {0:?}")]
    Timeout(Duration),

    #[error("Inference API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Inference API returned no output")]
    EmptyResponse,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text` into an output of `bounds.min..=bounds.max` tokens.
    ///
    /// Decoding is deterministic: implementations must not sample.
    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String>;

    /// Identifier of the model behind this capability
    fn model_id(&self) -> &str;
}

#[async_trait]
pub trait QuestionAnswerer: Send + Sync {
    /// Extract the answer to `question` from `context`
    async fn answer(&self, question: &str, context: &str) -> Result<Answer>;
}
