use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use keyword_search::{Keyword, Website};
use serde::Deserialize;

use crate::common::AppError;
use crate::domains::search::{actions, SearchResult};
use crate::server::app::AxumAppState;
use crate::server::routes::websites::DeletedResponse;

/// POST /search body. Missing lists are treated as empty (and rejected).
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub websites: Vec<Website>,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

/// POST /search - responds with a bare array of results
pub async fn search_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<SearchResult>>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    let results = actions::run_search(request.websites, request.keywords, &state.deps).await?;
    Ok(Json(results))
}

/// GET /search/results
pub async fn list_results_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<Vec<SearchResult>>, AppError> {
    Ok(Json(actions::list_recorded_results(&state.deps).await?))
}

/// DELETE /search/results
pub async fn clear_results_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    actions::clear_recorded_results(&state.deps).await?;
    Ok(Json(DeletedResponse::new()))
}
