use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::AppError;
use crate::domains::website::{actions, Website};
use crate::server::app::AxumAppState;

#[derive(Debug, Deserialize)]
pub struct CreateWebsiteInput {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

impl DeletedResponse {
    pub fn new() -> Self {
        Self {
            message: "Deleted".to_string(),
        }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// GET /websites
pub async fn list_websites_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<Vec<Website>>, AppError> {
    Ok(Json(actions::list_websites(&state.deps).await?))
}

/// POST /websites - body `{ "url": "https://..." }`
pub async fn create_website_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<CreateWebsiteInput>, JsonRejection>,
) -> Result<Json<Website>, AppError> {
    let Json(input) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    let website = actions::create_website(input.url.as_deref(), &state.deps).await?;
    Ok(Json(website))
}

/// DELETE /websites/:id
pub async fn delete_website_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    actions::delete_website(&id, &state.deps).await?;
    Ok(Json(DeletedResponse::new()))
}
