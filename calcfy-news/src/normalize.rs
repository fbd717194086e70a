//! Normalization and relevance filtering of raw articles

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use tracing::debug;

use calcfy_core::{NewsArticle, NewsCategory};

use crate::blocklist;
use crate::types::RawArticle;

pub const TITLE_PLACEHOLDER: &str = "Sem título";
pub const CONTENT_PLACEHOLDER: &str = "Sem descrição disponível";
pub const SOURCE_PLACEHOLDER: &str = "Fonte desconhecida";

/// Whether the blocklist filter runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Keep every article (baseline listing)
    Passthrough,
    /// Drop articles matching any blocklist (forced refresh)
    Relevance,
}

/// Map a raw article into the canonical shape
///
/// Missing fields are defaulted, never rejected. The category is left at its
/// default and assigned later by the categorizer.
pub fn normalize_article(raw: RawArticle, now: DateTime<Utc>) -> NewsArticle {
    let title = non_empty(raw.title).unwrap_or_else(|| TITLE_PLACEHOLDER.to_string());
    let content = non_empty(raw.description)
        .or_else(|| non_empty(raw.content))
        .unwrap_or_else(|| CONTENT_PLACEHOLDER.to_string());
    let source = non_empty(raw.source.and_then(|s| s.name))
        .unwrap_or_else(|| SOURCE_PLACEHOLDER.to_string());
    let url = non_empty(raw.url).unwrap_or_default();
    let published_at = non_empty(raw.published_at)
        .as_deref()
        .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or(now);

    let id = id_from_url(&url)
        .unwrap_or_else(|| fallback_id(&title, &source, &published_at.to_rfc3339()));

    NewsArticle {
        id,
        title,
        content,
        source,
        url,
        published_at,
        category: NewsCategory::default(),
        active: true,
        image_url: non_empty(raw.url_to_image),
    }
}

/// Whether an article passes the language and topic blocklists
pub fn is_relevant(article: &NewsArticle) -> bool {
    // Padded so space-delimited tokens also match at the start and end
    let text = format!(" {} {} ", article.title, article.content).to_lowercase();
    match blocklist::find_blocked(&text) {
        Some(token) => {
            debug!("Dropping article '{}' (matched '{}')", article.title, token);
            false
        }
        None => true,
    }
}

/// Normalize a batch, optionally filter it, then cap it at `max_items`
///
/// Surviving articles keep their input order.
pub fn normalize_and_filter(
    raws: Vec<RawArticle>,
    mode: FilterMode,
    max_items: usize,
    now: DateTime<Utc>,
) -> Vec<NewsArticle> {
    raws.into_iter()
        .map(|raw| normalize_article(raw, now))
        .filter(|article| mode == FilterMode::Passthrough || is_relevant(article))
        .take(max_items)
        .collect()
}

/// Last non-empty path segment of a URL
fn id_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    parsed
        .path_segments()?
        .filter(|s| !s.is_empty())
        .last()
        .map(|s| s.to_string())
}

/// Content hash used when the URL yields no segment
fn fallback_id(title: &str, source: &str, published_at: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(b"|");
    hasher.update(source.as_bytes());
    hasher.update(b"|");
    hasher.update(published_at.as_bytes());
    format!("news-{}", hex::encode(&hasher.finalize()[..8]))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
