//! Server dependencies (using traits for testability)
//!
//! This module provides the central dependency container handed to every
//! route handler and domain action. Storage and the result source sit behind
//! trait objects so tests can swap them out.

use anyhow::{Context, Result};
use keyword_search::{
    AggregatorConfig, Keyword, MockSource, ResultSource, SearchAggregator, SearchResult,
    StaticTableSource, TavilySource, Website,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::{Config, SourceKind};
use crate::kernel::memory_store::MemoryRepository;
use crate::kernel::postgres_store::{
    PgKeywordRepository, PgSearchResultRepository, PgWebsiteRepository,
};
use crate::kernel::traits::Repository;

/// Server dependencies accessible to handlers (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    /// Present only when running against Postgres; used by the health check.
    pub db_pool: Option<PgPool>,
    pub websites: Arc<dyn Repository<Website>>,
    pub keywords: Arc<dyn Repository<Keyword>>,
    /// Results of the most recent search run
    pub results: Arc<dyn Repository<SearchResult>>,
    pub source: Arc<dyn ResultSource>,
    pub aggregator: SearchAggregator,
}

impl ServerDeps {
    pub fn new(
        db_pool: Option<PgPool>,
        websites: Arc<dyn Repository<Website>>,
        keywords: Arc<dyn Repository<Keyword>>,
        results: Arc<dyn Repository<SearchResult>>,
        source: Arc<dyn ResultSource>,
        aggregator: SearchAggregator,
    ) -> Self {
        Self {
            db_pool,
            websites,
            keywords,
            results,
            source,
            aggregator,
        }
    }

    /// Dependencies with in-memory stores.
    pub fn in_memory(source: Arc<dyn ResultSource>, aggregator: SearchAggregator) -> Self {
        Self::new(
            None,
            Arc::new(MemoryRepository::<Website>::new()),
            Arc::new(MemoryRepository::<Keyword>::new()),
            Arc::new(MemoryRepository::<SearchResult>::new()),
            source,
            aggregator,
        )
    }

    /// Wire up dependencies from configuration.
    ///
    /// Connects to Postgres and runs migrations when `DATABASE_URL` is set,
    /// otherwise falls back to in-memory stores.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let source = create_result_source(config)?;
        let aggregator = SearchAggregator::new(
            AggregatorConfig::default()
                .with_lookup_timeout(config.lookup_timeout)
                .with_max_concurrency(config.search_concurrency)
                .with_run_deadline(config.request_timeout),
        );

        let Some(database_url) = config.database_url.as_deref() else {
            tracing::warn!("DATABASE_URL not set, using in-memory stores");
            return Ok(Self::in_memory(source, aggregator));
        };

        tracing::info!("Connecting to database...");
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .context("Failed to connect to database")?;
        tracing::info!("Database connected");

        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
        tracing::info!("Migrations complete");

        Ok(Self::new(
            Some(pool.clone()),
            Arc::new(PgWebsiteRepository::new(pool.clone())),
            Arc::new(PgKeywordRepository::new(pool.clone())),
            Arc::new(PgSearchResultRepository::new(pool)),
            source,
            aggregator,
        ))
    }
}

/// Pick the result source named by `SEARCH_SOURCE`.
pub fn create_result_source(config: &Config) -> Result<Arc<dyn ResultSource>> {
    let source: Arc<dyn ResultSource> = match config.search_source {
        SourceKind::Mock => Arc::new(MockSource),
        SourceKind::Static => match &config.static_table_path {
            Some(path) => {
                let json = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read static table {}", path.display())
                })?;
                let table = StaticTableSource::from_json(&json)
                    .with_context(|| format!("Invalid static table {}", path.display()))?;
                tracing::info!(rules = table.rules().len(), "Loaded static result table");
                Arc::new(table)
            }
            None => Arc::new(StaticTableSource::default()),
        },
        SourceKind::Tavily => {
            let api_key = config
                .tavily_api_key
                .clone()
                .context("TAVILY_API_KEY must be set when SEARCH_SOURCE=tavily")?;
            let tavily = TavilySource::new(api_key)
                .context("Failed to create Tavily client")?
                .with_max_results(config.tavily_max_results);
            Arc::new(tavily)
        }
    };

    tracing::info!(source = source.name(), "Result source configured");
    Ok(source)
}
