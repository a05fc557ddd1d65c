use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse<'a> {
    status: &'static str,
    model: &'a str,
}

pub async fn handler(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        model: state.summary.model_id(),
    })
}
