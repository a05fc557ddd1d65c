//! Validation of `/summarize` payloads.
//!
//! Checks run in a fixed order and stop at the first failure, so a client
//! always sees the earliest problem with its request.

use crate::sanitize::escape_html;
use brevity_model::LengthCategory;
use serde_json::Value;
use thiserror::Error;

/// Longest accepted text, counted in characters after trimming.
pub const MAX_TEXT_CHARS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid JSON payload")]
    InvalidPayload,

    #[error("Text is required")]
    MissingText,

    #[error("Text must be a string")]
    TextNotString,

    #[error("Invalid length. Must be one of: short, medium, long")]
    InvalidLength,

    #[error("Text exceeds the maximum length of 10000 characters")]
    TextTooLong,
}

/// A request that passed validation. `text` is trimmed and HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeRequest {
    pub text: String,
    pub length: LengthCategory,
    /// Characters in the trimmed text as submitted, before escaping.
    pub input_chars: usize,
}

pub fn validate_request(body: &[u8]) -> Result<SummarizeRequest, ValidationError> {
    let payload: Value =
        serde_json::from_slice(body).map_err(|_| ValidationError::InvalidPayload)?;
    let object = payload
        .as_object()
        .ok_or(ValidationError::InvalidPayload)?;

    let text = match object.get("text") {
        None | Some(Value::Null) => return Err(ValidationError::MissingText),
        Some(Value::String(text)) => text.trim(),
        Some(_) => return Err(ValidationError::TextNotString),
    };
    if text.is_empty() {
        return Err(ValidationError::MissingText);
    }

    let length = match object.get("length") {
        None | Some(Value::Null) => LengthCategory::default(),
        Some(Value::String(name)) => name
            .parse::<LengthCategory>()
            .map_err(|_| ValidationError::InvalidLength)?,
        Some(_) => return Err(ValidationError::InvalidLength),
    };

    let input_chars = text.chars().count();
    if input_chars > MAX_TEXT_CHARS {
        return Err(ValidationError::TextTooLong);
    }

    Ok(SummarizeRequest {
        text: escape_html(text),
        length,
        input_chars,
    })
}
