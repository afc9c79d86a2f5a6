//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod memory_store;
pub mod postgres_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::{create_result_source, ServerDeps};
pub use memory_store::MemoryRepository;
pub use postgres_store::{PgKeywordRepository, PgSearchResultRepository, PgWebsiteRepository};
pub use test_dependencies::{FailingRepository, TestDependencies};
pub use traits::*;
