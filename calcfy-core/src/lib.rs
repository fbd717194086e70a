//! Core types for the CalcFy news pipeline
//!
//! This crate defines the shared data structures used across the workspace:
//! the normalized news article, its category label and the response
//! envelopes served by the HTTP layer.

pub mod error;
pub mod news;

pub use error::{CalcfyError, CalcfyResult};
pub use news::{NewsArticle, NewsCategory, NewsResponse, RefreshErrorResponse, RefreshResponse};
