use crate::summary::SummaryError;
use crate::validation::ValidationError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use brevity_model::ModelError;
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

pub const SUMMARIZATION_FAILED_MESSAGE: &str = "Could not generate a summary for the provided text. The text may be too short or not suitable for summarization.";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", SUMMARIZATION_FAILED_MESSAGE)]
    SummarizationFailed,

    #[error("Model invocation failed: {0}")]
    ModelInvocation(#[from] ModelError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<SummaryError> for AppError {
    fn from(error: SummaryError) -> Self {
        match error {
            SummaryError::SummarizationFailed => AppError::SummarizationFailed,
            SummaryError::ModelInvocation(e) => AppError::ModelInvocation(e),
        }
    }
}

impl AppError {
    /// Message safe to show to a client. Server-side failures never leak detail.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::SummarizationFailed => SUMMARIZATION_FAILED_MESSAGE.to_string(),
            AppError::ModelInvocation(_) | AppError::Internal(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}

#[derive(Serialize)]
struct JsonError {
    error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::SummarizationFailed => StatusCode::BAD_REQUEST,
            AppError::ModelInvocation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(JsonError {
            error: self.public_message(),
        })
    }
}
