mod config;
mod errors;
mod handlers;
mod http;

use anyhow::Context;
use clap::Parser;
use config::{Cli, ServerConfig};
use http::server::Server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("http_server=info")),
        )
        .init();

    let config: ServerConfig = Cli::parse().into();
    info!(
        address = %config.bind_addr,
        directory = %config.directory.display(),
        "Starting server"
    );

    let server = Server::bind(config.clone())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    server.run().await.context("Server stopped")?;
    Ok(())
}
