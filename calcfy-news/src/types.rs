//! Wire types for the upstream news search API

use serde::{Deserialize, Serialize};

use calcfy_core::NewsArticle;

/// Search response envelope
#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    /// "ok" or "error"
    #[serde(default)]
    pub status: Option<String>,
    /// Total number of results available upstream
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<u64>,
    /// Articles for this page
    #[serde(default)]
    pub articles: Vec<RawArticle>,
    /// Error code when status is "error"
    #[serde(default)]
    pub code: Option<String>,
    /// Error message when status is "error"
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned with non-2xx responses
#[derive(Debug, Deserialize)]
pub struct NewsApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A single article as returned by the upstream API
///
/// Every field is optional; missing values are defaulted during
/// normalization instead of failing the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub source: Option<RawSource>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "urlToImage", default)]
    pub url_to_image: Option<String>,
    /// ISO 8601 publication date
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Publisher of a raw article
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<&NewsArticle> for RawArticle {
    fn from(article: &NewsArticle) -> Self {
        Self {
            source: Some(RawSource {
                id: None,
                name: Some(article.source.clone()),
            }),
            author: None,
            title: Some(article.title.clone()),
            description: Some(article.content.clone()),
            url: Some(article.url.clone()).filter(|u| !u.is_empty()),
            url_to_image: article.image_url.clone(),
            published_at: Some(article.published_at.to_rfc3339()),
            content: None,
        }
    }
}
