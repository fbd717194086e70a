//! Fixed search query for the financial news listing

/// Keywords OR-joined into the upstream search query
pub const FINANCIAL_KEYWORDS: &[&str] = &[
    "economia",
    "finanças",
    "investimentos",
    "bolsa de valores",
    "ibovespa",
    "dólar",
    "selic",
    "bitcoin",
];

/// Build the upstream query string
///
/// Multi-word phrases are quoted so the upstream matches them as a unit.
pub fn build_query() -> String {
    FINANCIAL_KEYWORDS
        .iter()
        .map(|k| {
            if k.contains(' ') {
                format!("\"{}\"", k)
            } else {
                (*k).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" OR ")
}
