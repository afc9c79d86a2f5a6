//! Search domain - fans out over websites × keywords and records the run

pub mod actions;

pub use keyword_search::SearchResult;
