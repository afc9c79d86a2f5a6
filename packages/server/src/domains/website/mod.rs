//! Website domain - registers the sites that searches run against

pub mod actions;

pub use keyword_search::Website;
