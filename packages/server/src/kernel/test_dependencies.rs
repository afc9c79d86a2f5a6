// TestDependencies - mock implementations for testing
//
// Builds ServerDeps with in-memory stores and a swappable result source.

use anyhow::Result;
use async_trait::async_trait;
use keyword_search::{AggregatorConfig, MockSource, ResultSource, SearchAggregator, SearchResult};
use std::sync::Arc;

use super::traits::{Record, Repository};
use super::ServerDeps;

// =============================================================================
// Failing Repository
// =============================================================================

/// Repository whose every call fails, for exercising storage outages.
pub struct FailingRepository;

#[async_trait]
impl<T: Record> Repository<T> for FailingRepository {
    async fn list(&self) -> Result<Vec<T>> {
        anyhow::bail!("storage unavailable")
    }

    async fn create(&self, _item: T) -> Result<T> {
        anyhow::bail!("storage unavailable")
    }

    async fn delete(&self, _id: &str) -> Result<bool> {
        anyhow::bail!("storage unavailable")
    }

    async fn clear(&self) -> Result<()> {
        anyhow::bail!("storage unavailable")
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    source: Arc<dyn ResultSource>,
    aggregator_config: AggregatorConfig,
    results: Option<Arc<dyn Repository<SearchResult>>>,
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            source: Arc::new(MockSource),
            aggregator_config: AggregatorConfig::default(),
            results: None,
        }
    }

    pub fn with_source(mut self, source: impl ResultSource + 'static) -> Self {
        self.source = Arc::new(source);
        self
    }

    pub fn with_aggregator_config(mut self, config: AggregatorConfig) -> Self {
        self.aggregator_config = config;
        self
    }

    /// Replace the search result store (e.g. with [`FailingRepository`]).
    pub fn with_results_repository(mut self, repo: Arc<dyn Repository<SearchResult>>) -> Self {
        self.results = Some(repo);
        self
    }

    pub fn into_server_deps(self) -> ServerDeps {
        let mut deps = ServerDeps::in_memory(
            self.source,
            SearchAggregator::new(self.aggregator_config),
        );
        if let Some(results) = self.results {
            deps.results = results;
        }
        deps
    }
}
