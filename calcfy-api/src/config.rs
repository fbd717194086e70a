//! Server configuration loaded from environment variables

use std::env;
use std::str::FromStr;
use std::time::Duration;

use calcfy_core::{CalcfyError, CalcfyResult};
use calcfy_news::newsapi::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use calcfy_news::MAX_PAGE_SIZE;

/// Configuration for the API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Upstream credential; None leaves the news routes unconfigured
    pub news_api_key: Option<String>,
    pub news_api_base_url: String,
    /// Deadline for one upstream request
    pub request_timeout: Duration,
    /// Default number of articles served by `GET /api/news`
    pub max_items: usize,
    /// Revalidation window advertised to the HTTP cache (in seconds)
    pub revalidate_secs: u64,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            news_api_key: None,
            news_api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            max_items: MAX_PAGE_SIZE,
            revalidate_secs: 3600,
            port: 3001,
        }
    }
}

impl ApiConfig {
    /// Load configuration from the process environment
    ///
    /// Reads:
    /// - NEWS_API_KEY: upstream API key (optional)
    /// - NEWS_API_BASE_URL: upstream base URL
    /// - NEWS_REQUEST_TIMEOUT_SECS: upstream deadline
    /// - NEWS_MAX_ITEMS: default listing size, clamped to 1..=20
    /// - NEWS_REVALIDATE_SECS: Cache-Control window
    /// - SERVER_PORT: listen port
    pub fn from_env() -> CalcfyResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> CalcfyResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let news_api_key = lookup("NEWS_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let news_api_base_url = lookup("NEWS_API_BASE_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(defaults.news_api_base_url);

        let timeout_secs: u64 = parse_var(
            &lookup,
            "NEWS_REQUEST_TIMEOUT_SECS",
            defaults.request_timeout.as_secs(),
        )?;
        if timeout_secs == 0 {
            return Err(CalcfyError::config(
                "NEWS_REQUEST_TIMEOUT_SECS must be greater than zero",
            ));
        }

        let max_items: usize = parse_var(&lookup, "NEWS_MAX_ITEMS", defaults.max_items)?;

        Ok(Self {
            news_api_key,
            news_api_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            max_items: max_items.clamp(1, MAX_PAGE_SIZE),
            revalidate_secs: parse_var(&lookup, "NEWS_REVALIDATE_SECS", defaults.revalidate_secs)?,
            port: parse_var(&lookup, "SERVER_PORT", defaults.port)?,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> CalcfyResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| CalcfyError::config(format!("Invalid {}='{}': {}", key, raw, e))),
        _ => Ok(default),
    }
}
