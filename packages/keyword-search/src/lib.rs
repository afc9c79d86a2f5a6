//! Keyword search fan-out library.
//!
//! Given a set of websites and a set of keywords, asks a pluggable
//! [`ResultSource`] what matches every (website, keyword) pair and merges the
//! answers into one list with each URL appearing once.
//!
//! # Usage
//!
//! ```rust,ignore
//! use keyword_search::{Keyword, MockSource, SearchAggregator, Website};
//!
//! let websites = vec![Website::new("w1", "https://example.com")];
//! let keywords = vec![Keyword::new("k1", "volunteer")];
//!
//! let aggregator = SearchAggregator::default();
//! let results = aggregator.aggregate(&websites, &keywords, &MockSource).await?;
//! ```
//!
//! # Modules
//!
//! - [`aggregator`] - The fan-out, URL joining and deduplication
//! - [`traits`] - The `ResultSource` capability
//! - [`sources`] - Interchangeable result sources (mock, static table, Tavily)
//! - [`types`] - Websites, keywords and results
//! - [`testing`] - Scripted sources for tests

pub mod aggregator;
pub mod error;
pub mod sources;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use aggregator::{dedup_by_url, join_url, AggregatorConfig, SearchAggregator};
pub use error::{AggregateError, LookupError, Result};
pub use secrecy::SecretString;
pub use sources::{MockSource, StaticRule, StaticTableSource, TavilySource};
pub use traits::source::ResultSource;
pub use types::{Keyword, ResultEntry, SearchResult, Website};
