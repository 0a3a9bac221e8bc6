#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use leptos::prelude::*;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "marquez server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let config = ServerConfig::from_env(leptos_options.site_addr)?;

    let app = routes::site_routes(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!(addr = %config.addr, "marquez listening");
    axum::serve(listener, app).await?;
    Ok(())
}
