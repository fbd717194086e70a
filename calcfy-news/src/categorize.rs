//! Keyword categorizer for news titles
//!
//! Rules are evaluated in order and the first match wins. Overlapping
//! keywords (a title mentioning both "dólar" and "bolsa") resolve to the
//! earlier rule.

use calcfy_core::{NewsArticle, NewsCategory};

/// A single categorization rule
#[derive(Debug)]
pub struct CategoryRule {
    pub keywords: &'static [&'static str],
    pub category: NewsCategory,
}

/// Ordered rule table
pub const RULES: &[CategoryRule] = &[
    CategoryRule {
        keywords: &["dólar", "dolar", "moeda", "câmbio", "cambio"],
        category: NewsCategory::Cambio,
    },
    CategoryRule {
        keywords: &["bolsa", "ibovespa", "ações", "acoes"],
        category: NewsCategory::Bolsa,
    },
    CategoryRule {
        keywords: &["bitcoin", "cripto", "ethereum"],
        category: NewsCategory::Criptomoedas,
    },
    CategoryRule {
        keywords: &["selic", "juros", "copom"],
        category: NewsCategory::Juros,
    },
    CategoryRule {
        keywords: &["fii", "fundos", "investimento", "imobiliário"],
        category: NewsCategory::Investimentos,
    },
];

/// Label used when no rule matches
pub const DEFAULT_CATEGORY: NewsCategory = NewsCategory::Economia;

/// Assign exactly one category to a title
pub fn categorize(title: &str) -> NewsCategory {
    let lower = title.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map(|rule| rule.category)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Categorize an article in place from its title
pub fn categorize_article(article: &mut NewsArticle) {
    article.category = categorize(&article.title);
}
