//! News-related API endpoints

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{error, info};

use calcfy_core::{NewsResponse, RefreshErrorResponse, RefreshResponse};
use calcfy_news::{NewsError, MAX_PAGE_SIZE};

use crate::AppState;

pub const REFRESH_SUCCESS_MESSAGE: &str = "Notícias atualizadas com sucesso";

/// Query parameters for listing news
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    /// Maximum number of results
    pub limit: Option<usize>,
}

/// Create news routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(get_news))
        .route("/news/refresh", get(refresh_news).post(refresh_news))
}

/// GET /api/news - Classified financial news
/// Upstream failures yield an empty list with 200; only a missing API key is a 500
async fn get_news(
    State(state): State<AppState>,
    Query(params): Query<NewsQuery>,
) -> impl IntoResponse {
    let limit = params
        .limit
        .unwrap_or(state.config.max_items)
        .clamp(1, MAX_PAGE_SIZE);

    match state.news_service.get_classified_news(limit).await {
        Ok(news) => (
            StatusCode::OK,
            [(header::CACHE_CONTROL, cache_control(state.config.revalidate_secs))],
            Json(NewsResponse { news }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to serve news: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": error_message(&e)
                })),
            )
                .into_response()
        }
    }
}

/// GET|POST /api/news/refresh - Fetch again with the relevance filter
/// Upstream failures are surfaced as 500
async fn refresh_news(State(state): State<AppState>) -> impl IntoResponse {
    match state.news_service.force_refresh().await {
        Ok(news) => {
            info!("Forced refresh returned {} articles", news.len());
            (
                StatusCode::OK,
                [(header::CACHE_CONTROL, "no-store".to_string())],
                Json(RefreshResponse {
                    success: true,
                    message: REFRESH_SUCCESS_MESSAGE.to_string(),
                    news,
                    timestamp: Utc::now(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to refresh news: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RefreshErrorResponse::new(error_message(&e))),
            )
                .into_response()
        }
    }
}

fn cache_control(revalidate_secs: u64) -> String {
    format!(
        "public, s-maxage={}, stale-while-revalidate={}",
        revalidate_secs, revalidate_secs
    )
}

fn error_message(e: &NewsError) -> String {
    match e {
        NewsError::InvalidConfig(msg) => msg.clone(),
        other => format!("Failed to fetch news: {}", other),
    }
}
