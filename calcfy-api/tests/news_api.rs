//! End-to-end tests for the news routes
//!
//! Run with: cargo test -p calcfy-api --test news_api

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tower::ServiceExt;

use calcfy_api::{app, ApiConfig, AppState};
use calcfy_news::{FetchOptions, NewsApiClient, NewsError, NewsFetcher, RawArticle, RawSource};
use calcfy_services::{NewsService, NewsServiceConfig};

/// Fetcher that fails the way a dropped connection does
struct UnreachableFetcher;

#[async_trait]
impl NewsFetcher for UnreachableFetcher {
    async fn fetch_articles(
        &self,
        _query: &str,
        _options: &FetchOptions,
    ) -> Result<Vec<RawArticle>, NewsError> {
        Err(NewsError::RequestFailed("connection reset by peer".to_string()))
    }
}

/// Fetcher returning a fixed batch
struct StaticFetcher(Vec<RawArticle>);

#[async_trait]
impl NewsFetcher for StaticFetcher {
    async fn fetch_articles(
        &self,
        _query: &str,
        _options: &FetchOptions,
    ) -> Result<Vec<RawArticle>, NewsError> {
        Ok(self.0.clone())
    }
}

fn router(fetcher: Option<Arc<dyn NewsFetcher>>) -> Router {
    let state = AppState {
        news_service: Arc::new(NewsService::new(fetcher, NewsServiceConfig::default())),
        config: Arc::new(ApiConfig::default()),
    };
    app(state)
}

fn raw(title: &str, url: &str) -> RawArticle {
    RawArticle {
        title: Some(title.to_string()),
        description: Some("Resumo".to_string()),
        url: Some(url.to_string()),
        source: Some(RawSource {
            id: None,
            name: Some("Valor".to_string()),
        }),
        published_at: Some("2024-01-10T12:00:00Z".to_string()),
        ..Default::default()
    }
}

async fn call(router: Router, method: Method, uri: &str) -> (StatusCode, Option<String>, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let cache = response
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, cache, body)
}

async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn upstream_client(body: Value) -> Arc<dyn NewsFetcher> {
    let upstream = Router::new().route(
        "/everything",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );
    let base = spawn_upstream(upstream).await;
    Arc::new(
        NewsApiClient::new("test-key".to_string())
            .unwrap()
            .with_base_url(base),
    )
}

#[tokio::test]
async fn test_empty_upstream_returns_empty_news() {
    let fetcher = upstream_client(serde_json::json!({
        "status": "ok",
        "totalResults": 0,
        "articles": []
    }))
    .await;

    let (status, cache, body) = call(router(Some(fetcher)), Method::GET, "/api/news").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "news": [] }));
    assert_eq!(
        cache.as_deref(),
        Some("public, s-maxage=3600, stale-while-revalidate=3600")
    );
}

#[tokio::test]
async fn test_bitcoin_article_is_categorized() {
    let fetcher = upstream_client(serde_json::json!({
        "status": "ok",
        "totalResults": 1,
        "articles": [{
            "source": { "id": null, "name": "InfoMoney" },
            "title": "Bitcoin supera US$ 44.000",
            "description": null,
            "url": "https://www.infomoney.com.br/mercados/bitcoin-supera-us-44-mil/",
            "publishedAt": "2024-01-10T12:00:00Z"
        }]
    }))
    .await;

    let (status, _, body) = call(router(Some(fetcher)), Method::GET, "/api/news").await;

    assert_eq!(status, StatusCode::OK);
    let article = &body["news"][0];
    assert_eq!(article["category"], "Criptomoedas");
    assert_eq!(article["content"], "Sem descrição disponível");
    assert_eq!(article["id"], "bitcoin-supera-us-44-mil");
    assert_eq!(article["source"], "InfoMoney");
    assert_eq!(article["active"], true);
}

#[tokio::test]
async fn test_blocklisted_article_dropped_on_refresh_only() {
    let fetcher: Arc<dyn NewsFetcher> = Arc::new(StaticFetcher(vec![
        raw("Dólar fecha em queda", "https://valor.com.br/dolar"),
        raw("Clássico de futebol movimenta bilheteria", "https://valor.com.br/futebol"),
    ]));

    let (status, _, body) =
        call(router(Some(fetcher.clone())), Method::POST, "/api/news/refresh").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Notícias atualizadas com sucesso");
    assert!(body["timestamp"].is_string());
    let titles: Vec<_> = body["news"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Dólar fecha em queda"]);

    let (_, _, body) = call(router(Some(fetcher)), Method::GET, "/api/news").await;
    assert_eq!(body["news"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_network_error_visibility_differs_by_route() {
    let fetcher: Arc<dyn NewsFetcher> = Arc::new(UnreachableFetcher);

    let (status, _, body) = call(router(Some(fetcher.clone())), Method::GET, "/api/news").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "news": [] }));

    let (status, _, body) = call(router(Some(fetcher)), Method::POST, "/api/news/refresh").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("connection reset by peer"));
}

#[tokio::test]
async fn test_refresh_truncates_to_twenty_in_order() {
    let raws: Vec<_> = (0..30)
        .map(|i| raw("Ibovespa avança", &format!("https://valor.com.br/bolsa/{}", i)))
        .collect();
    let fetcher: Arc<dyn NewsFetcher> = Arc::new(StaticFetcher(raws));

    let (status, cache, body) =
        call(router(Some(fetcher)), Method::GET, "/api/news/refresh").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache.as_deref(), Some("no-store"));
    let ids: Vec<_> = body["news"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect();
    let expected: Vec<_> = (0..20).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_limit_query_caps_listing() {
    let raws: Vec<_> = (0..10)
        .map(|i| raw("Selic", &format!("https://valor.com.br/juros/{}", i)))
        .collect();
    let fetcher: Arc<dyn NewsFetcher> = Arc::new(StaticFetcher(raws));

    let (_, _, body) = call(router(Some(fetcher)), Method::GET, "/api/news?limit=3").await;
    assert_eq!(body["news"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_missing_api_key_is_server_error() {
    let (status, _, body) = call(router(None), Method::GET, "/api/news").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "News API key not configured");

    let (status, _, body) = call(router(None), Method::POST, "/api/news/refresh").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "News API key not configured");
}

#[tokio::test]
async fn test_health_reports_configuration() {
    let (status, _, body) = call(router(None), Method::GET, "/api/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["news_configured"], false);

    let fetcher: Arc<dyn NewsFetcher> = Arc::new(StaticFetcher(vec![]));
    let (status, _, body) = call(router(Some(fetcher)), Method::GET, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
