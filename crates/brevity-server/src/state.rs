use crate::summary::SummaryService;
use brevity_model::{InferenceClient, Summarizer};
use std::sync::Arc;
use std::time::Duration;

/// Shared, read-only state. Built once before the server starts serving.
pub struct AppState {
    pub summary: SummaryService,
}

impl AppState {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            summary: SummaryService::new(summarizer),
        }
    }

    /// State backed by a hosted summarization model.
    pub fn with_inference(
        inference_url: &str,
        api_token: Option<String>,
        model: &str,
        timeout: Duration,
    ) -> brevity_model::Result<Self> {
        log::info!(
            "Creating summarization model {} at {} (timeout {:?})",
            model,
            inference_url,
            timeout
        );

        let mut client = InferenceClient::new(inference_url).with_timeout(timeout);
        if let Some(token) = api_token {
            client = client.with_api_token(token);
        }
        let handle = client.for_model(model)?;

        Ok(Self::new(Arc::new(handle)))
    }
}
