use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    Json,
};
use serde::Deserialize;

use crate::common::AppError;
use crate::domains::keyword::{actions, Keyword};
use crate::server::app::AxumAppState;
use crate::server::routes::websites::DeletedResponse;

#[derive(Debug, Deserialize)]
pub struct CreateKeywordInput {
    #[serde(default)]
    pub keyword: Option<String>,
}

/// GET /keywords
pub async fn list_keywords_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<Vec<Keyword>>, AppError> {
    Ok(Json(actions::list_keywords(&state.deps).await?))
}

/// POST /keywords - body `{ "keyword": "..." }`
pub async fn create_keyword_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<CreateKeywordInput>, JsonRejection>,
) -> Result<Json<Keyword>, AppError> {
    let Json(input) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    let keyword = actions::create_keyword(input.keyword.as_deref(), &state.deps).await?;
    Ok(Json(keyword))
}

/// DELETE /keywords/:id
pub async fn delete_keyword_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    actions::delete_keyword(&id, &state.deps).await?;
    Ok(Json(DeletedResponse::new()))
}
