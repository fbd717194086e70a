//! Static blocklists for the relevance filter
//!
//! Tokens are lowercase substrings matched against the lowercased title and
//! content. There is no word-boundary check: a token matches inside a longer
//! word too.

/// Words that indicate a non-Portuguese article slipped past the language filter
pub const LANGUAGE_MISMATCH: &[&str] = &[
    "according to",
    " the ",
    "stock market",
    "shares of",
    "however",
    "según",
    "también",
    "economía",
    "año ",
    "bursátil",
];

/// Entertainment and celebrity topics
pub const OFF_TOPIC_ENTERTAINMENT: &[&str] = &[
    "novela",
    "big brother",
    "bbb",
    "reality show",
    "celebridade",
    "famosos",
    "horóscopo",
    "fofoca",
    "carnaval",
    "cinema",
];

/// Sports topics
pub const OFF_TOPIC_SPORTS: &[&str] = &[
    "futebol",
    "brasileirão",
    "campeonato",
    "copa do mundo",
    "flamengo",
    "corinthians",
    "palmeiras",
    "fórmula 1",
    "olimpíada",
    "nba",
];

/// All blocklists, in the order they are checked
pub const ALL: &[&[&str]] = &[LANGUAGE_MISMATCH, OFF_TOPIC_ENTERTAINMENT, OFF_TOPIC_SPORTS];

/// First blocklisted token found in already-lowercased text
pub fn find_blocked(text_lower: &str) -> Option<&'static str> {
    ALL.iter()
        .flat_map(|list| list.iter())
        .find(|token| text_lower.contains(*token))
        .copied()
}
