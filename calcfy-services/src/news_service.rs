//! News Service
//!
//! Composes fetch, normalize, filter, categorize and dedupe into the two
//! operations served over HTTP. The service keeps no state between calls:
//! caching is left to the HTTP layer through Cache-Control headers.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, instrument, warn};

use calcfy_core::NewsArticle;
use calcfy_news::{
    build_query, categorize_article, dedupe, normalize_and_filter, FetchOptions, FilterMode,
    NewsError, NewsFetcher, RawArticle, SortBy, MAX_PAGE_SIZE,
};

/// Configuration for NewsService
#[derive(Debug, Clone)]
pub struct NewsServiceConfig {
    /// Articles requested from the upstream per fetch
    pub page_size: usize,
    /// Default cap for the baseline listing
    pub max_items: usize,
    /// Cap applied by a forced refresh
    pub refresh_max_items: usize,
    /// Upstream language filter
    pub language: Option<String>,
}

impl Default for NewsServiceConfig {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            max_items: 20,
            refresh_max_items: 20,
            language: Some("pt".to_string()),
        }
    }
}

/// News service for the financial news listing
pub struct NewsService {
    /// None when no API key was configured
    fetcher: Option<Arc<dyn NewsFetcher>>,
    config: NewsServiceConfig,
}

impl NewsService {
    /// Create a new NewsService over an injected fetcher
    pub fn new(fetcher: Option<Arc<dyn NewsFetcher>>, config: NewsServiceConfig) -> Self {
        info!(
            "Initializing NewsService (fetcher configured: {})",
            fetcher.is_some()
        );
        Self { fetcher, config }
    }

    pub fn is_configured(&self) -> bool {
        self.fetcher.is_some()
    }

    pub fn config(&self) -> &NewsServiceConfig {
        &self.config
    }

    /// Classified news for page rendering
    ///
    /// Upstream failures degrade to an empty list so a news outage never
    /// breaks the page. Only a missing configuration is returned as an error.
    #[instrument(skip(self))]
    pub async fn get_classified_news(
        &self,
        max_items: usize,
    ) -> Result<Vec<NewsArticle>, NewsError> {
        let raws = match self.fetch().await {
            Ok(raws) => raws,
            Err(e) if e.is_upstream() => {
                warn!("News fetch failed, serving empty list: {}", e);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let articles = classify(raws, FilterMode::Passthrough, max_items);
        info!("Serving {} classified articles", articles.len());
        Ok(articles)
    }

    /// Fetch again with the relevance filter applied
    ///
    /// Unlike the baseline listing, upstream failures are returned to the caller.
    #[instrument(skip(self))]
    pub async fn force_refresh(&self) -> Result<Vec<NewsArticle>, NewsError> {
        let raws = self.fetch().await.inspect_err(|e| {
            error!("Forced news refresh failed: {}", e);
        })?;

        let articles = classify(raws, FilterMode::Relevance, self.config.refresh_max_items);
        info!("Forced refresh produced {} articles", articles.len());
        Ok(articles)
    }

    async fn fetch(&self) -> Result<Vec<RawArticle>, NewsError> {
        let fetcher = self
            .fetcher
            .as_ref()
            .ok_or_else(|| NewsError::InvalidConfig("News API key not configured".to_string()))?;

        let options = FetchOptions {
            page_size: self.config.page_size,
            sort_by: SortBy::PublishedAt,
            language: self.config.language.clone(),
            country: None,
        };

        fetcher.fetch_articles(&build_query(), &options).await
    }
}

/// Normalize, filter, categorize, dedupe, then cap; upstream order is kept
fn classify(raws: Vec<RawArticle>, mode: FilterMode, max_items: usize) -> Vec<NewsArticle> {
    let mut articles = normalize_and_filter(raws, mode, usize::MAX, Utc::now());
    articles.iter_mut().for_each(categorize_article);

    let mut articles = dedupe(articles);
    articles.truncate(max_items);
    articles
}
