//! Search domain actions - business logic functions

use keyword_search::{Keyword, Website};
use tracing::{info, warn};

use crate::common::AppError;
use crate::domains::search::SearchResult;
use crate::kernel::ServerDeps;

/// Run a search over every (website, keyword) pair
///
/// Lookup failures are absorbed by the aggregator, so the only client error
/// is empty input. The run's results replace the previously recorded run;
/// failing to record them is logged and does not fail the search.
pub async fn run_search(
    websites: Vec<Website>,
    keywords: Vec<Keyword>,
    deps: &ServerDeps,
) -> Result<Vec<SearchResult>, AppError> {
    if websites.is_empty() || keywords.is_empty() {
        return Err(AppError::validation("Websites and keywords are required"));
    }

    info!(
        websites = websites.len(),
        keywords = keywords.len(),
        source = deps.source.name(),
        "Running search"
    );

    let results = deps
        .aggregator
        .aggregate(&websites, &keywords, deps.source.as_ref())
        .await?;

    if let Err(e) = deps.results.replace_all(results.clone()).await {
        warn!(error = %e, "Failed to record search results");
    }

    Ok(results)
}

/// Results recorded by the most recent search run
pub async fn list_recorded_results(deps: &ServerDeps) -> Result<Vec<SearchResult>, AppError> {
    Ok(deps.results.list().await?)
}

/// Forget the recorded search results
pub async fn clear_recorded_results(deps: &ServerDeps) -> Result<(), AppError> {
    deps.results.clear().await?;
    info!("Recorded search results cleared");
    Ok(())
}
