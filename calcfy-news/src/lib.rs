//! News ingestion and classification for the CalcFy news listing
//!
//! This crate provides the pipeline stages:
//! - Fetcher: a client for the upstream news search API
//! - Normalizer/Filter: canonical article shape plus blocklist filtering
//! - Categorizer: ordered keyword rules assigning one label per article
//! - Dedupe: drops repeated articles while keeping upstream order

pub mod blocklist;
pub mod categorize;
pub mod dedupe;
pub mod error;
pub mod newsapi;
pub mod normalize;
pub mod query;
pub mod types;

pub use categorize::{categorize, categorize_article};
pub use dedupe::dedupe;
pub use error::NewsError;
pub use newsapi::{FetchOptions, NewsApiClient, NewsFetcher, SortBy, MAX_PAGE_SIZE};
pub use normalize::{is_relevant, normalize_and_filter, normalize_article, FilterMode};
pub use query::build_query;
pub use types::{RawArticle, RawSource};
