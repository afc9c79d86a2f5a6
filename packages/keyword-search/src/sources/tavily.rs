use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::LookupError;
use crate::traits::source::ResultSource;
use crate::types::{Keyword, ResultEntry, Website};

const TAVILY_SEARCH_URL: &str = "https://api.tavily.com/search";

/// Tavily-backed result source.
///
/// Searches `site:{host} {keyword}` so results stay on the website, although
/// the provider is free to return off-site URLs and those are kept.
pub struct TavilySource {
    api_key: SecretString,
    client: reqwest::Client,
    endpoint: String,
    /// Maximum results requested per pair.
    pub max_results: usize,
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    query: &'a str,
    search_depth: &'static str,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    url: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

impl TavilySource {
    pub fn new(api_key: impl Into<SecretString>) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| LookupError::Http(Box::new(e)))?;

        Ok(Self {
            api_key: api_key.into(),
            client,
            endpoint: TAVILY_SEARCH_URL.to_string(),
            max_results: 5,
        })
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Point at a different search endpoint (self-hosted proxy, test server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

fn build_query(website: &Website, keyword: &Keyword) -> String {
    match website.host() {
        Some(host) => format!("site:{} {}", host, keyword.keyword),
        None => keyword.keyword.clone(),
    }
}

fn into_entries(response: TavilyResponse) -> Vec<ResultEntry> {
    response
        .results
        .into_iter()
        .map(|r| {
            let title = r
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| r.url.clone());
            let mut entry = ResultEntry::new(title, r.url);
            entry.snippet = r.content;
            entry
        })
        .collect()
}

#[async_trait]
impl ResultSource for TavilySource {
    async fn lookup(
        &self,
        website: &Website,
        keyword: &Keyword,
    ) -> Result<Vec<ResultEntry>, LookupError> {
        let query = build_query(website, keyword);
        let request = TavilyRequest {
            query: &query,
            search_depth: "basic",
            max_results: self.max_results,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| LookupError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LookupError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body: TavilyResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?;

        Ok(into_entries(body))
    }

    fn name(&self) -> &'static str {
        "tavily"
    }
}
