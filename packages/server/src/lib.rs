// Keyword Search - API Core
//
// CRUD for websites and keywords plus the search endpoint that fans out over
// every (website, keyword) pair through a configurable result source.
//
// Business logic lives per-domain in domains/*/actions; storage and external
// services are injected through kernel::ServerDeps.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
