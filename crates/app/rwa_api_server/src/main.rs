//! RWA case search API server binary.
//!
//! Serves the case search, intent prediction, and health endpoints. Model
//! credentials and proxy settings are read from the environment (`.env` is
//! honored).

use std::sync::Arc;

use clap::Parser;
use rwa_api::config::{ApiConfig, DEFAULT_HOST, DEFAULT_PORT};
use rwa_core::llm::anthropic::AnthropicClient;
use rwa_core::llm::config::LlmConfig;
use rwa_core::search::{CaseSearch, ModelSettings};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "rwa_api_server", about = "RWA case search API server")]
struct Args {
    /// Interface to listen on.
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,rwa_api=debug,rwa_core=debug"))?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let args = Args::parse();
    let config = ApiConfig::new(&args.host, args.port, LlmConfig::from_env()?);

    log_llm_config(&config.llm);

    let client = AnthropicClient::new(&config.llm)?;
    let search = CaseSearch::new(Arc::new(client), ModelSettings::from(&config.llm));

    let state = rwa_api::AppState {
        search,
        config: config.clone(),
    };
    let app = rwa_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Startup diagnostics. The key itself is never printed.
fn log_llm_config(llm: &LlmConfig) {
    match llm.api_key_summary() {
        Some((len, well_formed)) => {
            info!(key_len = len, well_formed, "model API key configured");
            if !well_formed {
                warn!("model API key does not look like an Anthropic key");
            }
        }
        None => warn!("ANTHROPIC_API_KEY is not set; case searches will fail"),
    }

    match &llm.proxy_url {
        Some(proxy) => info!(proxy = %proxy, "outbound proxy enabled"),
        None => info!("outbound proxy disabled or not configured"),
    }

    info!(
        model = %llm.model,
        max_tokens = llm.max_tokens,
        base_url = %llm.base_url,
        "model settings"
    );
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
