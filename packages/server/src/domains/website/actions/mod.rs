//! Website domain actions - business logic functions

use tracing::info;

use crate::common::{new_record_id, AppError};
use crate::domains::website::Website;
use crate::kernel::ServerDeps;

/// List all registered websites in creation order
pub async fn list_websites(deps: &ServerDeps) -> Result<Vec<Website>, AppError> {
    Ok(deps.websites.list().await?)
}

/// Register a website from a caller-supplied URL
///
/// The URL is trimmed and doubles as the initial title.
pub async fn create_website(url: Option<&str>, deps: &ServerDeps) -> Result<Website, AppError> {
    let url = url.map(str::trim).unwrap_or_default();
    if url.is_empty() {
        return Err(AppError::validation("URL is required"));
    }

    let website = Website::new(new_record_id(), url).with_title(url);
    let website = deps.websites.create(website).await?;

    info!(website_id = %website.id, url = %website.url, "Website created");
    Ok(website)
}

/// Delete a website by id
pub async fn delete_website(id: &str, deps: &ServerDeps) -> Result<(), AppError> {
    if !deps.websites.delete(id).await? {
        return Err(AppError::not_found("Website not found"));
    }

    info!(website_id = %id, "Website deleted");
    Ok(())
}
