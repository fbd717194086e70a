//! CalcFy News API Server
//!
//! HTTP API server that serves categorized financial news.

use std::net::SocketAddr;
use std::sync::Arc;

use calcfy_api::{app, ApiConfig, AppState};
use calcfy_news::{NewsApiClient, NewsFetcher};
use calcfy_services::{NewsService, NewsServiceConfig};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,calcfy_api=debug")),
        )
        .init();

    info!("Starting CalcFy News API");

    let config = ApiConfig::from_env()?;

    let fetcher: Option<Arc<dyn NewsFetcher>> = match config.news_api_key.clone() {
        Some(api_key) => {
            let client = NewsApiClient::with_timeout(api_key, config.request_timeout)?
                .with_base_url(config.news_api_base_url.clone());
            info!("News API client configured ({})", config.news_api_base_url);
            Some(Arc::new(client))
        }
        None => {
            warn!("NEWS_API_KEY not set - news routes will answer 500 until configured");
            None
        }
    };

    let news_config = NewsServiceConfig {
        max_items: config.max_items,
        ..NewsServiceConfig::default()
    };
    let news_service = Arc::new(NewsService::new(fetcher, news_config));

    let port = config.port;
    let state = AppState {
        news_service,
        config: Arc::new(config),
    };

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
