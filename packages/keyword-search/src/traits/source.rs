//! Result source trait.
//!
//! A `ResultSource` answers "what matches this keyword at this website". The
//! aggregator depends on it but never implements it; concrete strategies live
//! in [`crate::sources`] and are chosen by the application at startup.
//!
//! ```rust,ignore
//! let source: Arc<dyn ResultSource> = match config.search_source.as_str() {
//!     "tavily" => Arc::new(TavilySource::new(api_key)),
//!     "static" => Arc::new(StaticTableSource::default()),
//!     _ => Arc::new(MockSource),
//! };
//! ```

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::LookupError;
use crate::types::{Keyword, ResultEntry, Website};

/// Pluggable lookup for one (website, keyword) pair.
///
/// Implementations may fail; the aggregator treats every error as
/// "skip this pair and continue".
#[async_trait]
pub trait ResultSource: Send + Sync {
    /// Return zero or more entries matching `keyword` at `website`.
    async fn lookup(
        &self,
        website: &Website,
        keyword: &Keyword,
    ) -> Result<Vec<ResultEntry>, LookupError>;

    /// Short name used in log fields.
    fn name(&self) -> &'static str {
        "unknown"
    }
}

#[async_trait]
impl<S: ResultSource + ?Sized> ResultSource for Arc<S> {
    async fn lookup(
        &self,
        website: &Website,
        keyword: &Keyword,
    ) -> Result<Vec<ResultEntry>, LookupError> {
        (**self).lookup(website, keyword).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
