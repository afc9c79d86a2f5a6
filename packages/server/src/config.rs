use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Which `ResultSource` the search endpoint uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Mock,
    Static,
    Tavily,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Mock => write!(f, "mock"),
            SourceKind::Static => write!(f, "static"),
            SourceKind::Tavily => write!(f, "tavily"),
        }
    }
}

impl std::str::FromStr for SourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(SourceKind::Mock),
            "static" => Ok(SourceKind::Static),
            "tavily" => Ok(SourceKind::Tavily),
            other => Err(anyhow::anyhow!("Invalid search source: {}", other)),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Postgres connection string; in-memory stores are used when unset.
    pub database_url: Option<String>,
    pub search_source: SourceKind,
    pub tavily_api_key: Option<String>,
    pub tavily_max_results: usize,
    pub static_table_path: Option<PathBuf>,
    pub lookup_timeout: Duration,
    pub search_concurrency: usize,
    pub request_timeout: Duration,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (the environment in production).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let search_source = match non_empty("SEARCH_SOURCE") {
            Some(value) => value
                .parse::<SourceKind>()
                .context("SEARCH_SOURCE must be mock, static or tavily")?,
            None => SourceKind::Mock,
        };

        let tavily_api_key = non_empty("TAVILY_API_KEY");
        if search_source == SourceKind::Tavily && tavily_api_key.is_none() {
            bail!("TAVILY_API_KEY must be set when SEARCH_SOURCE=tavily");
        }

        let search_concurrency: usize = non_empty("SEARCH_CONCURRENCY")
            .unwrap_or_else(|| "1".to_string())
            .parse()
            .context("SEARCH_CONCURRENCY must be a valid number")?;
        if search_concurrency == 0 {
            bail!("SEARCH_CONCURRENCY must be at least 1");
        }

        Ok(Self {
            port: non_empty("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            database_url: non_empty("DATABASE_URL"),
            search_source,
            tavily_api_key,
            tavily_max_results: non_empty("TAVILY_MAX_RESULTS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .context("TAVILY_MAX_RESULTS must be a valid number")?,
            static_table_path: non_empty("STATIC_TABLE_PATH").map(PathBuf::from),
            lookup_timeout: Duration::from_secs(
                non_empty("LOOKUP_TIMEOUT_SECS")
                    .unwrap_or_else(|| "10".to_string())
                    .parse()
                    .context("LOOKUP_TIMEOUT_SECS must be a valid number")?,
            ),
            search_concurrency,
            request_timeout: Duration::from_secs(
                non_empty("REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .context("REQUEST_TIMEOUT_SECS must be a valid number")?,
            ),
            allowed_origins: non_empty("ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}
