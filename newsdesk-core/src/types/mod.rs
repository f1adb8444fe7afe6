//! Core types for news lookups

mod news;
mod query;

pub use news::{NewsItem, NewsQueryResult};
pub use query::{NewsQuery, DEFAULT_LANGUAGE};
