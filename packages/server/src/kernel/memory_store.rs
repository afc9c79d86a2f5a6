//! In-memory storage implementation for tests and running without a database.

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::traits::{Record, Repository};

/// Vec-backed repository. Data is lost on restart.
pub struct MemoryRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Start with `items` already stored.
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>> {
        Ok(self.items.read().await.clone())
    }

    async fn create(&self, item: T) -> Result<T> {
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut items = self.items.write().await;
        match items.iter().position(|item| item.id() == id) {
            Some(index) => {
                items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn clear(&self) -> Result<()> {
        self.items.write().await.clear();
        Ok(())
    }

    async fn replace_all(&self, items: Vec<T>) -> Result<()> {
        *self.items.write().await = items;
        Ok(())
    }
}
