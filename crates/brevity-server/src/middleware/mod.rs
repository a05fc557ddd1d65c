pub mod request_id;

pub use request_id::{extract_request_id, RequestId, TraceId, REQUEST_ID_HEADER};

use actix_web::middleware::DefaultHeaders;

/// Browser hardening headers attached to every response.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "DENY"))
        .add(("X-XSS-Protection", "1; mode=block"))
}
