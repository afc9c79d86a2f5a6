//! Postgres-backed repositories.
//!
//! Schema lives in `migrations/`; `ServerDeps::from_config` runs the embedded
//! migrations on startup. Queries use the runtime `query_as` API so builds
//! don't need a live database.

use anyhow::{Context, Result};
use async_trait::async_trait;
use keyword_search::{Keyword, SearchResult, Website};
use sqlx::PgPool;

use super::traits::Repository;

// =============================================================================
// Websites
// =============================================================================

pub struct PgWebsiteRepository {
    pool: PgPool,
}

impl PgWebsiteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Website> for PgWebsiteRepository {
    async fn list(&self) -> Result<Vec<Website>> {
        let websites = sqlx::query_as::<_, Website>(
            "SELECT id, url, title FROM websites ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list websites")?;
        Ok(websites)
    }

    async fn create(&self, item: Website) -> Result<Website> {
        let website = sqlx::query_as::<_, Website>(
            r#"
            INSERT INTO websites (id, url, title)
            VALUES ($1, $2, $3)
            RETURNING id, url, title
            "#,
        )
        .bind(&item.id)
        .bind(&item.url)
        .bind(&item.title)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert website")?;
        Ok(website)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM websites WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete website")?;
        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM websites")
            .execute(&self.pool)
            .await
            .context("Failed to clear websites")?;
        Ok(())
    }
}

// =============================================================================
// Keywords
// =============================================================================

pub struct PgKeywordRepository {
    pool: PgPool,
}

impl PgKeywordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Keyword> for PgKeywordRepository {
    async fn list(&self) -> Result<Vec<Keyword>> {
        let keywords = sqlx::query_as::<_, Keyword>(
            "SELECT id, keyword FROM keywords ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list keywords")?;
        Ok(keywords)
    }

    async fn create(&self, item: Keyword) -> Result<Keyword> {
        let keyword = sqlx::query_as::<_, Keyword>(
            "INSERT INTO keywords (id, keyword) VALUES ($1, $2) RETURNING id, keyword",
        )
        .bind(&item.id)
        .bind(&item.keyword)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert keyword")?;
        Ok(keyword)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM keywords WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete keyword")?;
        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM keywords")
            .execute(&self.pool)
            .await
            .context("Failed to clear keywords")?;
        Ok(())
    }
}

// =============================================================================
// Search results
// =============================================================================

pub struct PgSearchResultRepository {
    pool: PgPool,
}

impl PgSearchResultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const INSERT_RESULT: &str = r#"
    INSERT INTO search_results (id, title, url, snippet, website_id, keyword_id, created_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
"#;

#[async_trait]
impl Repository<SearchResult> for PgSearchResultRepository {
    async fn list(&self) -> Result<Vec<SearchResult>> {
        let results = sqlx::query_as::<_, SearchResult>(
            r#"
            SELECT id, title, url, snippet, website_id, keyword_id, created_at
            FROM search_results
            ORDER BY position
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list search results")?;
        Ok(results)
    }

    async fn create(&self, item: SearchResult) -> Result<SearchResult> {
        sqlx::query(INSERT_RESULT)
            .bind(&item.id)
            .bind(&item.title)
            .bind(&item.url)
            .bind(&item.snippet)
            .bind(&item.website_id)
            .bind(&item.keyword_id)
            .bind(item.created_at)
            .execute(&self.pool)
            .await
            .context("Failed to insert search result")?;
        Ok(item)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM search_results WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete search result")?;
        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM search_results")
            .execute(&self.pool)
            .await
            .context("Failed to clear search results")?;
        Ok(())
    }

    /// Replace the stored run atomically.
    async fn replace_all(&self, items: Vec<SearchResult>) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        sqlx::query("DELETE FROM search_results")
            .execute(&mut *tx)
            .await
            .context("Failed to clear search results")?;

        for item in &items {
            sqlx::query(INSERT_RESULT)
                .bind(&item.id)
                .bind(&item.title)
                .bind(&item.url)
                .bind(&item.snippet)
                .bind(&item.website_id)
                .bind(&item.keyword_id)
                .bind(item.created_at)
                .execute(&mut *tx)
                .await
                .context("Failed to insert search result")?;
        }

        tx.commit().await.context("Failed to commit search results")?;
        Ok(())
    }
}
