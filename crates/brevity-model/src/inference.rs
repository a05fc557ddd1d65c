//! Client for Hugging Face Inference API compatible model endpoints.
//!
//! Every model is reached at `POST {base_url}/models/{model_id}`. The
//! summarization task answers with `[{"summary_text": ...}]`, the
//! question-answering task with `{"answer": ..., "score": ...}`.

use crate::provider::{ModelError, QuestionAnswerer, Result, Summarizer};
use crate::types::{Answer, LengthBounds};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_SUMMARIZATION_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
pub const DEFAULT_QA_MODEL: &str = "deepset/roberta-base-squad2";
/// Generation time limit applied to every model call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
    timeout: Duration,
}

impl InferenceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.api_token = if token.trim().is_empty() {
            None
        } else {
            Some(token)
        };
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Bind the client to one hosted model.
    pub fn for_model(&self, model_id: impl Into<String>) -> Result<ModelHandle> {
        let model_id = model_id.into();
        if model_id.trim().is_empty() {
            return Err(ModelError::Config("model id must not be empty".to_string()));
        }
        Ok(ModelHandle {
            client: self.clone(),
            model_id,
        })
    }

    async fn post<B, T>(&self, model_id: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/models/{}", self.base_url, model_id);
        let mut request = self.client.post(&url).timeout(self.timeout).json(body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        log::debug!("Calling inference endpoint {}", url);
        let response = request.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ModelError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.map_send_error(e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn map_send_error(&self, error: reqwest::Error) -> ModelError {
        if error.is_timeout() {
            ModelError::Timeout(self.timeout)
        } else {
            ModelError::Http(error)
        }
    }
}

/// An [`InferenceClient`] bound to a single model id.
#[derive(Clone)]
pub struct ModelHandle {
    client: InferenceClient,
    model_id: String,
}

#[derive(Debug, Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct SummarizationParameters {
    min_length: u32,
    max_length: u32,
    do_sample: bool,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct SummarizationOutput {
    summary_text: String,
}

#[derive(Debug, Serialize)]
struct QuestionAnsweringRequest<'a> {
    inputs: QuestionAnsweringInputs<'a>,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct QuestionAnsweringInputs<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuestionAnsweringOutput {
    Single(Answer),
    Ranked(Vec<Answer>),
}

#[async_trait]
impl Summarizer for ModelHandle {
    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String> {
        let request = SummarizationRequest {
            inputs: text,
            parameters: SummarizationParameters {
                min_length: bounds.min,
                max_length: bounds.max,
                do_sample: false,
            },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let outputs: Vec<SummarizationOutput> =
            self.client.post(&self.model_id, &request).await?;

        outputs
            .into_iter()
            .next()
            .map(|output| output.summary_text)
            .ok_or(ModelError::EmptyResponse)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[async_trait]
impl QuestionAnswerer for ModelHandle {
    async fn answer(&self, question: &str, context: &str) -> Result<Answer> {
        let request = QuestionAnsweringRequest {
            inputs: QuestionAnsweringInputs { question, context },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        match self.client.post(&self.model_id, &request).await? {
            QuestionAnsweringOutput::Single(answer) => Ok(answer),
            QuestionAnsweringOutput::Ranked(answers) => {
                answers.into_iter().next().ok_or(ModelError::EmptyResponse)
            }
        }
    }
}
