//! Interchangeable result sources.
//!
//! - [`MockSource`] - fabricates one result per pair, no I/O
//! - [`StaticTableSource`] - keyword substring → fixed results table
//! - [`TavilySource`] - Tavily web search API, scoped to the website's host

mod mock;
mod static_table;
mod tavily;

pub use mock::MockSource;
pub use static_table::{StaticRule, StaticTableSource};
pub use tavily::TavilySource;
