//! Keyword domain - the terms every website is searched for

pub mod actions;

pub use keyword_search::Keyword;
