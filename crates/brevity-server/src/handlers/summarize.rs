use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::logging::Timer;
use crate::middleware::extract_request_id;
use crate::state::AppState;
use crate::validation::{validate_request, ValidationError};

/// Largest body read for `/summarize`. Generous next to the text cap so that
/// escaped JSON near the limit still reaches the validator.
pub const MAX_PAYLOAD_BYTES: usize = 256 * 1024;

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// `POST /summarize`
///
/// The body is read raw so malformed JSON and oversized bodies get the same
/// `{error}` shape as every other rejection.
pub async fn handler(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    payload: web::Payload,
) -> Result<HttpResponse, AppError> {
    let request_id = extract_request_id(&http_req);

    let request = read_body(payload, MAX_PAYLOAD_BYTES)
        .await
        .and_then(|body| validate_request(&body))
        .map_err(|e| {
            log::info!("[{}] Rejected summarization request: {}", request_id, e);
            AppError::from(e)
        })?;

    log::info!(
        "[{}] Received summarization request. Length: {} chars, Desired summary: {}.",
        request_id,
        request.input_chars,
        request.length
    );

    let timer = Timer::new(format!("[{}] summarization", request_id));
    let result = state.summary.summarize(&request.text, request.length).await;
    drop(timer);

    match result {
        Ok(summary) => Ok(HttpResponse::Ok().json(SummarizeResponse { summary })),
        Err(e) => {
            let error = AppError::from(e);
            match &error {
                AppError::SummarizationFailed => log::warn!(
                    "[{}] Failed to generate summary for the provided text.",
                    request_id
                ),
                other => log::error!(
                    "[{}] An error occurred during summarization ({} chars, {}): {:?}",
                    request_id,
                    request.input_chars,
                    request.length,
                    other
                ),
            }
            Err(error)
        }
    }
}

/// Collect the body, giving up as soon as it grows past `limit` bytes.
async fn read_body(
    mut payload: web::Payload,
    limit: usize,
) -> Result<web::BytesMut, ValidationError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|_| ValidationError::InvalidPayload)?;
        if body.len() + chunk.len() > limit {
            return Err(ValidationError::TextTooLong);
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
