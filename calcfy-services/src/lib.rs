//! Business logic services for the CalcFy news pipeline
//!
//! Services compose the stages from `calcfy-news` into request-scoped
//! operations consumed by the HTTP layer.

pub mod news_service;

pub use news_service::{NewsService, NewsServiceConfig};
