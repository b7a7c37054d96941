//! Binary crate for the weather history HTTP server.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - Binding the listener and serving the router

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_core::{Config, HistoryStore, OpenWeatherProvider};
use weather_server::{AppState, cli::Cli, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Cli::parse();
    let config = Config::from_env();

    let history = HistoryStore::json_file(args.history_file);
    let provider = Arc::new(OpenWeatherProvider::new(&config));
    let router = create_router(AppState::new(history, provider));

    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    info!("weather server listening on http://{}", args.addr);
    info!("  POST   /             - forecast for a city");
    info!("  GET    /history      - search history");
    info!("  DELETE /history/{{id}} - remove a history entry");

    axum::serve(listener, router).await?;

    Ok(())
}
