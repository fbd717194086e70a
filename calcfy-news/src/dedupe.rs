//! Duplicate removal for normalized articles

use std::collections::HashSet;

use calcfy_core::NewsArticle;

/// Drop repeated articles, keeping the first occurrence
///
/// Articles are keyed on their full URL. The id only serves as key when the
/// URL is empty, since URL-derived ids (last path segment) are not unique.
pub fn dedupe(articles: Vec<NewsArticle>) -> Vec<NewsArticle> {
    let mut seen = HashSet::new();

    articles
        .into_iter()
        .filter(|article| {
            let key = if article.url.is_empty() {
                format!("id:{}", article.id)
            } else {
                format!("url:{}", article.url)
            };
            seen.insert(key)
        })
        .collect()
}
