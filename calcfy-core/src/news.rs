//! News data structures for the financial news listing

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category label assigned to a news article
///
/// The set is closed: every article carries exactly one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NewsCategory {
    #[serde(rename = "Câmbio")]
    Cambio,
    #[default]
    #[serde(rename = "Economia")]
    Economia,
    #[serde(rename = "Bolsa")]
    Bolsa,
    #[serde(rename = "Criptomoedas")]
    Criptomoedas,
    #[serde(rename = "Juros")]
    Juros,
    #[serde(rename = "Investimentos")]
    Investimentos,
    #[serde(rename = "Finanças Pessoais")]
    FinancasPessoais,
}

impl NewsCategory {
    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            NewsCategory::Cambio => "Câmbio",
            NewsCategory::Economia => "Economia",
            NewsCategory::Bolsa => "Bolsa",
            NewsCategory::Criptomoedas => "Criptomoedas",
            NewsCategory::Juros => "Juros",
            NewsCategory::Investimentos => "Investimentos",
            NewsCategory::FinancasPessoais => "Finanças Pessoais",
        }
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A normalized, categorized news article ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    /// Stable identifier (last URL path segment or content hash), never empty
    pub id: String,
    /// Article title
    pub title: String,
    /// Short content snippet
    pub content: String,
    /// Publisher name
    pub source: String,
    /// Absolute article URL
    pub url: String,
    /// Publication date
    pub published_at: DateTime<Utc>,
    /// Category label
    pub category: NewsCategory,
    /// Always true for freshly fetched items
    pub active: bool,
    /// Article thumbnail/image URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
}

/// Body of `GET /api/news`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsResponse {
    pub news: Vec<NewsArticle>,
}

/// Body of a successful forced refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub success: bool,
    pub message: String,
    pub news: Vec<NewsArticle>,
    pub timestamp: DateTime<Utc>,
}

/// Body of a failed forced refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshErrorResponse {
    pub success: bool,
    pub error: String,
}

impl RefreshErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
