//! Upstream news search API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::error::NewsError;
use crate::types::{NewsApiErrorBody, NewsApiResponse, RawArticle};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Upper bound the upstream accepts for one page
pub const MAX_PAGE_SIZE: usize = 20;

/// Fixed identifying client header
pub const CLIENT_USER_AGENT: &str = "CalcFy/1.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Upstream ordering of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    PublishedAt,
    Relevancy,
    Popularity,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::PublishedAt => "publishedAt",
            SortBy::Relevancy => "relevancy",
            SortBy::Popularity => "popularity",
        }
    }
}

/// Options for a single fetch
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Results per page, clamped to `1..=MAX_PAGE_SIZE`
    pub page_size: usize,
    pub sort_by: SortBy,
    /// ISO 639-1 language filter
    pub language: Option<String>,
    /// ISO 3166 country filter
    pub country: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            sort_by: SortBy::PublishedAt,
            language: Some("pt".to_string()),
            country: None,
        }
    }
}

/// Source of raw articles
///
/// One call issues at most one upstream request; there is no retry.
#[async_trait]
pub trait NewsFetcher: Send + Sync {
    async fn fetch_articles(
        &self,
        query: &str,
        options: &FetchOptions,
    ) -> Result<Vec<RawArticle>, NewsError>;
}

/// News search API client
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
    /// Create a new client with the default timeout
    pub fn new(api_key: String) -> Result<Self, NewsError> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    /// Create a new client whose requests expire after `timeout`
    pub fn with_timeout(api_key: String, timeout: Duration) -> Result<Self, NewsError> {
        if api_key.trim().is_empty() {
            return Err(NewsError::InvalidConfig("News API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(CLIENT_USER_AGENT)
            .build()
            .map_err(|e| NewsError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at another base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl NewsFetcher for NewsApiClient {
    #[instrument(skip(self, options), fields(page_size = options.page_size))]
    async fn fetch_articles(
        &self,
        query: &str,
        options: &FetchOptions,
    ) -> Result<Vec<RawArticle>, NewsError> {
        let page_size = options.page_size.clamp(1, MAX_PAGE_SIZE);

        let mut params: Vec<(&str, String)> = vec![
            ("q", query.to_string()),
            ("sortBy", options.sort_by.as_str().to_string()),
            ("pageSize", page_size.to_string()),
        ];
        if let Some(ref language) = options.language {
            params.push(("language", language.clone()));
        }
        if let Some(ref country) = options.country {
            params.push(("country", country.clone()));
        }
        params.push(("apiKey", self.api_key.clone()));

        debug!(
            "Fetching news: query='{}', page_size={}",
            query.chars().take(80).collect::<String>(),
            page_size
        );

        let response = self
            .client
            .get(format!("{}/everything", self.base_url))
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<NewsApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.message.or(b.code))
                .unwrap_or(body);
            return Err(NewsError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let status = response.status();
        let body = response.text().await?;
        let parsed: NewsApiResponse =
            serde_json::from_str(&body).map_err(|e| NewsError::ParseError(e.to_string()))?;

        if parsed.status.as_deref() == Some("error") {
            return Err(NewsError::ApiError {
                status: status.as_u16(),
                message: parsed
                    .message
                    .or(parsed.code)
                    .unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        info!(
            "Received {} articles from news API (total {:?})",
            parsed.articles.len(),
            parsed.total_results
        );

        Ok(parsed.articles)
    }
}
