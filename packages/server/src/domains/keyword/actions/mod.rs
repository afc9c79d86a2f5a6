//! Keyword domain actions - business logic functions

use tracing::info;

use crate::common::{new_record_id, AppError};
use crate::domains::keyword::Keyword;
use crate::kernel::ServerDeps;

/// List all keywords in creation order
pub async fn list_keywords(deps: &ServerDeps) -> Result<Vec<Keyword>, AppError> {
    Ok(deps.keywords.list().await?)
}

/// Add a keyword; blank and duplicate keywords are rejected
pub async fn create_keyword(
    keyword: Option<&str>,
    deps: &ServerDeps,
) -> Result<Keyword, AppError> {
    let keyword = keyword.map(str::trim).unwrap_or_default();
    if keyword.is_empty() {
        return Err(AppError::validation("Keyword is required"));
    }

    let existing = deps.keywords.list().await?;
    if existing.iter().any(|k| k.keyword == keyword) {
        return Err(AppError::validation("Keyword already exists"));
    }

    let keyword = deps
        .keywords
        .create(Keyword::new(new_record_id(), keyword))
        .await?;

    info!(keyword_id = %keyword.id, keyword = %keyword.keyword, "Keyword created");
    Ok(keyword)
}

/// Delete a keyword by id
pub async fn delete_keyword(id: &str, deps: &ServerDeps) -> Result<(), AppError> {
    if !deps.keywords.delete(id).await? {
        return Err(AppError::not_found("Keyword not found"));
    }

    info!(keyword_id = %id, "Keyword deleted");
    Ok(())
}
