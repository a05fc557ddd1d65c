use actix_web::{web, App, HttpServer};
use std::io;

use crate::handlers;
use crate::middleware::{security_headers, RequestId};
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            workers: None,
        }
    }
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::pages::index))
        .route("/static/js/app.js", web::get().to(handlers::pages::script))
        .route("/favicon.ico", web::get().to(handlers::pages::favicon))
        .route("/health", web::get().to(handlers::health::handler))
        .route("/summarize", web::post().to(handlers::summarize::handler));
}

pub async fn run_server(state: AppState, config: ServerConfig) -> io::Result<()> {
    let state = web::Data::new(state);

    log::info!(
        "Serving model {} on http://{}:{}",
        state.summary.model_id(),
        config.host,
        config.port
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(security_headers())
            .wrap(RequestId)
            .configure(app_config)
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
