pub mod inference;
pub mod provider;
pub mod types;

pub use inference::{
    InferenceClient, ModelHandle, DEFAULT_INFERENCE_URL, DEFAULT_QA_MODEL,
    DEFAULT_SUMMARIZATION_MODEL, DEFAULT_TIMEOUT,
};
pub use provider::{ModelError, QuestionAnswerer, Result, Summarizer};
pub use types::{Answer, LengthBounds, LengthCategory, ParseLengthError};
