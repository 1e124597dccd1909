use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use website::config::ServerConfig;
use website::database::activity_registry::InMemoryActivityRegistry;
use website::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 2. Configuration
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // 3. Registry, seeded fresh on every start
    let registry = match InMemoryActivityRegistry::seeded() {
        Ok(r) => r,
        Err(e) => {
            error!("invalid seed activities: {}", e);
            std::process::exit(1);
        }
    };
    let app = web::app(Arc::new(registry), &config.static_dir);

    // 4. Bind, with one fallback port
    let addr = config.addr();
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr();
            warn!("could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            match TcpListener::bind(fallback).await {
                Ok(l) => l,
                Err(e) => {
                    error!("could not bind fallback {}: {}", fallback, e);
                    std::process::exit(1);
                }
            }
        }
    };

    match listener.local_addr() {
        Ok(bound) => info!(
            static_dir = %config.static_dir.display(),
            "Mergington activities running on http://{}",
            bound
        ),
        Err(e) => warn!("could not read bound address: {}", e),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {}", e);
        std::process::exit(1);
    }
}
