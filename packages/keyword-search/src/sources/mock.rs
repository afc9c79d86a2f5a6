use async_trait::async_trait;

use crate::error::LookupError;
use crate::traits::source::ResultSource;
use crate::types::{Keyword, ResultEntry, Website};

/// Fabricates a single result for every pair.
///
/// Handy for demos and for running the server without any provider
/// credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

#[async_trait]
impl ResultSource for MockSource {
    async fn lookup(
        &self,
        website: &Website,
        keyword: &Keyword,
    ) -> Result<Vec<ResultEntry>, LookupError> {
        let encoded: String = url::form_urlencoded::byte_serialize(keyword.keyword.as_bytes())
            .collect();

        let entry = ResultEntry::new(
            format!("Search result: {}", keyword.keyword),
            format!("/search?q={}", encoded),
        )
        .with_snippet(format!(
            "Found information about \"{}\" on {}",
            keyword.keyword, website.url
        ));

        Ok(vec![entry])
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
