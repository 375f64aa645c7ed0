mod api_doc;
mod app;
mod config;
mod handlers;
mod models;
mod routes;
mod state;

use anyhow::Context;
use config::Config;
use state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-axum-greeter starting");

    let config = Config::from_env()?;
    config.log_startup();

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app::build_router(state))
        .await
        .context("Server error")?;

    Ok(())
}
