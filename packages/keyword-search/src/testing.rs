//! Testing utilities including a scripted result source.
//!
//! Useful for exercising aggregation and the HTTP layer without network
//! calls. Outcomes are keyed by `(website_id, keyword_id)`; unscripted pairs
//! answer with no entries.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::error::LookupError;
use crate::traits::source::ResultSource;
use crate::types::{Keyword, ResultEntry, Website};

type PairKey = (String, String);

#[derive(Debug, Clone)]
enum Outcome {
    Entries(Vec<ResultEntry>),
    Failure(String),
}

/// A deterministic [`ResultSource`] for tests.
///
/// ```rust,ignore
/// let source = ScriptedSource::new()
///     .with_entries("w1", "k1", vec![ResultEntry::new("T", "/p")])
///     .with_failure("w2", "k1", "provider down");
/// ```
#[derive(Default)]
pub struct ScriptedSource {
    outcomes: HashMap<PairKey, Outcome>,
    delays: HashMap<PairKey, Duration>,
    calls: Mutex<Vec<PairKey>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `entries` for this pair.
    pub fn with_entries(
        mut self,
        website_id: &str,
        keyword_id: &str,
        entries: Vec<ResultEntry>,
    ) -> Self {
        self.outcomes
            .insert(key(website_id, keyword_id), Outcome::Entries(entries));
        self
    }

    /// Fail this pair with [`LookupError::Other`].
    pub fn with_failure(mut self, website_id: &str, keyword_id: &str, message: &str) -> Self {
        self.outcomes.insert(
            key(website_id, keyword_id),
            Outcome::Failure(message.to_string()),
        );
        self
    }

    /// Sleep before answering this pair.
    pub fn with_delay(mut self, website_id: &str, keyword_id: &str, delay: Duration) -> Self {
        self.delays.insert(key(website_id, keyword_id), delay);
        self
    }

    /// Pairs looked up so far as `(website_id, keyword_id)`, in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn key(website_id: &str, keyword_id: &str) -> PairKey {
    (website_id.to_string(), keyword_id.to_string())
}

#[async_trait]
impl ResultSource for ScriptedSource {
    async fn lookup(
        &self,
        website: &Website,
        keyword: &Keyword,
    ) -> Result<Vec<ResultEntry>, LookupError> {
        let pair = key(&website.id, &keyword.id);
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(pair.clone());

        if let Some(delay) = self.delays.get(&pair) {
            tokio::time::sleep(*delay).await;
        }

        match self.outcomes.get(&pair) {
            Some(Outcome::Entries(entries)) => Ok(entries.clone()),
            Some(Outcome::Failure(message)) => Err(LookupError::Other(message.clone())),
            None => Ok(Vec::new()),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
