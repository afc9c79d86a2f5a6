// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "keywords are unique") lives in domain actions that use these traits.

use anyhow::Result;
use async_trait::async_trait;
use keyword_search::{Keyword, SearchResult, Website};

// =============================================================================
// Record (anything a Repository can hold)
// =============================================================================

pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

impl Record for Website {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Keyword {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for SearchResult {
    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Repository Trait (Infrastructure - storage)
// =============================================================================

#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// All records in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Store a new record and return it as stored
    async fn create(&self, item: T) -> Result<T>;

    /// Remove a record; `false` when no record had that id
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Remove every record
    async fn clear(&self) -> Result<()>;

    /// Swap the whole contents for `items`
    async fn replace_all(&self, items: Vec<T>) -> Result<()> {
        self.clear().await?;
        for item in items {
            self.create(item).await?;
        }
        Ok(())
    }
}
