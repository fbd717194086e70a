//! CalcFy news API
//!
//! HTTP surface over the news pipeline: the baseline listing, the forced
//! refresh and health checks.

pub mod config;
pub mod routes;

use std::sync::Arc;

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use calcfy_services::NewsService;

pub use config::ApiConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub news_service: Arc<NewsService>,
    pub config: Arc<ApiConfig>,
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    // Configure CORS for frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .nest("/api", routes::api_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
