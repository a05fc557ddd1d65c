use crate::sanitize::escape_html;
use brevity_model::{LengthCategory, ModelError, Summarizer};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    /// The model answered, but with nothing usable.
    #[error("model returned an empty summary")]
    SummarizationFailed,

    #[error("model invocation failed: {0}")]
    ModelInvocation(#[from] ModelError),
}

/// Maps a length category to model bounds and checks what comes back.
#[derive(Clone)]
pub struct SummaryService {
    summarizer: Arc<dyn Summarizer>,
}

impl SummaryService {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self { summarizer }
    }

    pub fn model_id(&self) -> &str {
        self.summarizer.model_id()
    }

    /// Summarize already-validated text. The returned summary is escaped.
    pub async fn summarize(
        &self,
        text: &str,
        length: LengthCategory,
    ) -> Result<String, SummaryError> {
        let bounds = length.bounds();
        log::debug!(
            "Summarizing {} chars with {} (min={}, max={})",
            text.chars().count(),
            self.summarizer.model_id(),
            bounds.min,
            bounds.max
        );

        let raw = self.summarizer.summarize(text, bounds).await?;

        let summary = raw.trim();
        if summary.is_empty() {
            return Err(SummaryError::SummarizationFailed);
        }

        Ok(escape_html(summary))
    }
}
