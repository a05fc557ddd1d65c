use anyhow::Context;
use clap::Parser;
use std::time::Duration;

use brevity_model::{DEFAULT_INFERENCE_URL, DEFAULT_SUMMARIZATION_MODEL};
use brevity_server::logging::init_logging;
use brevity_server::{run_server, AppState, ServerConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "brevity-server")]
#[command(about = "Text summarization HTTP server")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Server port
    #[arg(long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Inference API base URL
    #[arg(long, env = "INFERENCE_URL", default_value = DEFAULT_INFERENCE_URL)]
    inference_url: String,

    /// Inference API token
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Summarization model id
    #[arg(long, env = "SUMMARIZATION_MODEL", default_value = DEFAULT_SUMMARIZATION_MODEL)]
    model: String,

    /// Generation time limit per request, in seconds
    #[arg(long, env = "MODEL_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,

    /// HTTP worker threads (defaults to the number of CPU cores)
    #[arg(long, env = "WORKERS")]
    workers: Option<usize>,

    /// Log level (overrides debug flag)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging(cli.debug, cli.log_level.as_deref());

    log::info!("Starting Brevity server on {}:{}", cli.host, cli.port);
    log::info!("Model Configuration:");
    log::info!("  Inference URL: {}", cli.inference_url);
    log::info!("  Model: {}", cli.model);
    log::info!("  Timeout: {}s", cli.timeout_secs);

    if cli.debug {
        log::debug!("Debug mode enabled");
        log::debug!("  API token set: {}", cli.api_token.is_some());
        log::debug!("  Workers: {:?}", cli.workers);
    }

    // The model handle is built once here and shared by every worker.
    let state = AppState::with_inference(
        &cli.inference_url,
        cli.api_token,
        &cli.model,
        Duration::from_secs(cli.timeout_secs),
    )
    .context("Failed to initialise summarization model")?;

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        workers: cli.workers,
    };

    run_server(state, config)
        .await
        .context("Web server error")
}
