use actix_web::{HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const APP_JS: &str = include_str!("../../static/js/app.js");

pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

pub async fn script() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(APP_JS)
}

/// Browsers ask for a favicon on every page load; answer without a 404.
pub async fn favicon() -> impl Responder {
    HttpResponse::NoContent().finish()
}
