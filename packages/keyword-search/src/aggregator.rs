//! Search fan-out: websites × keywords → deduplicated results.
//!
//! # Pipeline
//!
//! 1. Reject empty inputs with [`AggregateError::Validation`]
//! 2. Walk the cross product, keyword outer and website inner
//! 3. Look up every pair through the [`ResultSource`], each call bounded by
//!    `lookup_timeout` (and by what is left of `run_deadline`); failures and
//!    timeouts are logged and skipped
//! 4. Turn every returned entry into a [`SearchResult`] with an absolute URL
//!
//!    Entry URLs that parse as absolute must be `http(s)` with a host. Any
//!    other absolute form is dropped as malformed, which includes relative
//!    paths whose first segment looks like a scheme (`Category:Foo`,
//!    `example.com:8080/p`). Sources should send those as `/Category:Foo`
//!    or as full URLs.
//!
//! 5. Drop later duplicates of a URL, keeping the first one seen
//!
//! With `max_concurrency > 1` lookups overlap, but results are still
//! collected in the canonical (keyword, website, entry) order so the
//! deduplication outcome is the same as a sequential run.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::error::{AggregateError, LookupError, Result};
use crate::traits::source::ResultSource;
use crate::types::{Keyword, ResultEntry, SearchResult, Website};

/// Tuning knobs for an aggregator.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Upper bound on a single `lookup` call.
    pub lookup_timeout: Duration,
    /// How many lookups may be in flight at once. `1` is fully sequential.
    pub max_concurrency: usize,
    /// Budget for a whole run. Pairs not looked up before it runs out are
    /// skipped like failed lookups. `None` means no overall bound.
    pub run_deadline: Option<Duration>,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            lookup_timeout: Duration::from_secs(10),
            max_concurrency: 1,
            run_deadline: None,
        }
    }
}

impl AggregatorConfig {
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.max_concurrency = max;
        self
    }

    pub fn with_run_deadline(mut self, deadline: Duration) -> Self {
        self.run_deadline = Some(deadline);
        self
    }
}

/// Stateless fan-out over a [`ResultSource`].
///
/// Holds only configuration, so one instance can serve any number of
/// concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct SearchAggregator {
    config: AggregatorConfig,
}

impl SearchAggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Search every website for every keyword and merge the answers.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::Validation`] if `websites` or `keywords` is
    /// empty. Lookup failures never surface here; a source that fails for
    /// every pair yields `Ok(vec![])`.
    pub async fn aggregate<S>(
        &self,
        websites: &[Website],
        keywords: &[Keyword],
        source: &S,
    ) -> Result<Vec<SearchResult>>
    where
        S: ResultSource + ?Sized,
    {
        validate(websites, keywords)?;
        Ok(self.run(websites, keywords, source).await)
    }

    /// Like [`aggregate`](Self::aggregate), but stops as soon as `cancel`
    /// fires. Partial results are discarded.
    pub async fn aggregate_cancellable<S>(
        &self,
        websites: &[Website],
        keywords: &[Keyword],
        source: &S,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>>
    where
        S: ResultSource + ?Sized,
    {
        validate(websites, keywords)?;

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!(source = source.name(), "search aggregation cancelled");
                Err(AggregateError::Cancelled)
            }
            results = self.run(websites, keywords, source) => Ok(results),
        }
    }

    async fn run<S>(
        &self,
        websites: &[Website],
        keywords: &[Keyword],
        source: &S,
    ) -> Vec<SearchResult>
    where
        S: ResultSource + ?Sized,
    {
        let started_at = Utc::now();
        let deadline = self.config.run_deadline.map(|budget| Instant::now() + budget);
        let pairs: Vec<(&Website, &Keyword)> = keywords
            .iter()
            .flat_map(|keyword| websites.iter().map(move |website| (website, keyword)))
            .collect();

        // `buffered` yields in input order regardless of completion order.
        // Boxed so the run future stays `Send` for `dyn ResultSource`.
        let outcomes: Vec<_> = stream::iter(pairs)
            .map(|(website, keyword)| async move {
                let entries = self.lookup_pair(source, website, keyword, deadline).await;
                (website, keyword, entries)
            })
            .buffered(self.config.max_concurrency.max(1))
            .boxed()
            .collect()
            .await;

        let mut accumulated = Vec::new();
        for (website, keyword, entries) in outcomes {
            for entry in entries {
                let sequence = accumulated.len();
                if let Some(result) = synthesize(website, keyword, entry, sequence, started_at) {
                    accumulated.push(result);
                }
            }
        }

        let produced = accumulated.len();
        let results = dedup_by_url(accumulated);

        tracing::info!(
            source = source.name(),
            websites = websites.len(),
            keywords = keywords.len(),
            produced,
            unique = results.len(),
            "search aggregation complete"
        );

        results
    }

    async fn lookup_pair<S>(
        &self,
        source: &S,
        website: &Website,
        keyword: &Keyword,
        deadline: Option<Instant>,
    ) -> Vec<ResultEntry>
    where
        S: ResultSource + ?Sized,
    {
        let budget = match deadline {
            Some(deadline) => self
                .config
                .lookup_timeout
                .min(deadline.saturating_duration_since(Instant::now())),
            None => self.config.lookup_timeout,
        };

        if budget.is_zero() {
            tracing::warn!(
                source = source.name(),
                website_id = %website.id,
                keyword_id = %keyword.id,
                "run deadline reached, skipping pair"
            );
            return Vec::new();
        }

        let outcome = match tokio::time::timeout(budget, source.lookup(website, keyword)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(LookupError::Timeout {
                millis: budget.as_millis(),
            }),
        };

        match outcome {
            Ok(entries) => {
                tracing::debug!(
                    source = source.name(),
                    website_id = %website.id,
                    keyword_id = %keyword.id,
                    count = entries.len(),
                    "lookup returned entries"
                );
                entries
            }
            Err(error) => {
                tracing::warn!(
                    source = source.name(),
                    website_id = %website.id,
                    keyword_id = %keyword.id,
                    error = %error,
                    "lookup failed, skipping pair"
                );
                Vec::new()
            }
        }
    }
}

fn validate(websites: &[Website], keywords: &[Keyword]) -> Result<()> {
    if websites.is_empty() {
        return Err(AggregateError::validation("websites must not be empty"));
    }
    if keywords.is_empty() {
        return Err(AggregateError::validation("keywords must not be empty"));
    }
    Ok(())
}

fn synthesize(
    website: &Website,
    keyword: &Keyword,
    entry: ResultEntry,
    sequence: usize,
    started_at: DateTime<Utc>,
) -> Option<SearchResult> {
    let Some(url) = resolve_url(&website.url, &entry.url) else {
        tracing::warn!(
            website_id = %website.id,
            keyword_id = %keyword.id,
            url = %entry.url,
            "skipping entry with malformed url"
        );
        return None;
    };

    Some(SearchResult {
        id: format!(
            "{}-{}-{}-{}",
            website.id,
            keyword.id,
            sequence,
            started_at.timestamp_millis()
        ),
        title: entry.title,
        url,
        snippet: entry.snippet,
        website_id: website.id.clone(),
        keyword_id: keyword.id.clone(),
        created_at: started_at,
    })
}

/// Resolve an entry URL against the website base, or `None` if it is blank
/// or an absolute URL we can't use.
///
/// `Url::parse` reads `Category:Foo` as scheme `category`, so such entries
/// land in the `Ok(_) => None` arm.
fn resolve_url(base: &str, raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match Url::parse(raw) {
        Ok(parsed) if is_web_url(&parsed) => Some(raw.to_string()),
        Ok(_) => None,
        Err(url::ParseError::RelativeUrlWithoutBase) => Some(join_url(base, raw)),
        Err(_) => None,
    }
}

fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https") && url.host_str().is_some()
}

/// Join a website base URL and a result path with exactly one `/` between
/// them. Absolute `http(s)` paths are returned unchanged.
///
/// ```
/// use keyword_search::join_url;
///
/// assert_eq!(join_url("https://a.com/", "/x"), "https://a.com/x");
/// assert_eq!(join_url("https://a.com", "/x"), "https://a.com/x");
/// assert_eq!(join_url("https://a.com/docs", "x"), "https://a.com/docs/x");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let path = path.trim();
    if let Ok(parsed) = Url::parse(path) {
        if is_web_url(&parsed) {
            return path.to_string();
        }
    }

    let base = base.trim().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// Keep the first result for every distinct URL, preserving order.
pub fn dedup_by_url(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen = HashSet::with_capacity(results.len());
    results
        .into_iter()
        .filter(|result| seen.insert(result.url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedSource;

    fn websites(ids_and_urls: &[(&str, &str)]) -> Vec<Website> {
        ids_and_urls
            .iter()
            .map(|(id, url)| Website::new(*id, *url))
            .collect()
    }

    fn keywords(ids_and_words: &[(&str, &str)]) -> Vec<Keyword> {
        ids_and_words
            .iter()
            .map(|(id, word)| Keyword::new(*id, *word))
            .collect()
    }

    fn pair_of(result: &SearchResult) -> (&str, &str) {
        (result.keyword_id.as_str(), result.website_id.as_str())
    }

    #[tokio::test]
    async fn concrete_single_pair_scenario() {
        let source = ScriptedSource::new().with_entries(
            "w1",
            "k1",
            vec![ResultEntry::new("T", "/p").with_snippet("S")],
        );

        let results = SearchAggregator::default()
            .aggregate(
                &websites(&[("w1", "https://ex.com")]),
                &keywords(&[("k1", "foo")]),
                &source,
            )
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.url, "https://ex.com/p");
        assert_eq!(result.website_id, "w1");
        assert_eq!(result.keyword_id, "k1");
        assert_eq!(result.title, "T");
        assert_eq!(result.snippet.as_deref(), Some("S"));
        assert_eq!(
            result.id,
            format!("w1-k1-0-{}", result.created_at.timestamp_millis())
        );
    }

    #[tokio::test]
    async fn empty_source_yields_empty_ok() {
        let source = ScriptedSource::new();

        let results = SearchAggregator::default()
            .aggregate(
                &websites(&[("w1", "https://a.com"), ("w2", "https://b.com")]),
                &keywords(&[("k1", "foo")]),
                &source,
            )
            .await
            .unwrap();

        assert!(results.is_empty());
        assert_eq!(source.calls().len(), 2);
    }

    #[tokio::test]
    async fn empty_websites_is_validation_error() {
        let source = ScriptedSource::new();
        let err = SearchAggregator::default()
            .aggregate(&[], &keywords(&[("k1", "foo")]), &source)
            .await
            .unwrap_err();

        assert!(matches!(err, AggregateError::Validation { .. }));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_keywords_is_validation_error() {
        let source = ScriptedSource::new();
        let err = SearchAggregator::default()
            .aggregate(&websites(&[("w1", "https://a.com")]), &[], &source)
            .await
            .unwrap_err();

        assert!(matches!(err, AggregateError::Validation { .. }));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn output_follows_keyword_outer_website_inner_order() {
        let source = ScriptedSource::new()
            .with_entries("w1", "k1", vec![ResultEntry::new("a", "/k1w1")])
            .with_entries("w2", "k1", vec![ResultEntry::new("b", "/k1w2")])
            .with_entries("w1", "k2", vec![ResultEntry::new("c", "/k2w1")])
            .with_entries("w2", "k2", vec![ResultEntry::new("d", "/k2w2")]);

        let results = SearchAggregator::default()
            .aggregate(
                &websites(&[("w1", "https://a.com"), ("w2", "https://b.com")]),
                &keywords(&[("k1", "one"), ("k2", "two")]),
                &source,
            )
            .await
            .unwrap();

        let order: Vec<_> = results.iter().map(pair_of).collect();
        assert_eq!(
            order,
            vec![("k1", "w1"), ("k1", "w2"), ("k2", "w1"), ("k2", "w2")]
        );
        assert_eq!(
            source.calls(),
            vec![
                ("w1".to_string(), "k1".to_string()),
                ("w2".to_string(), "k1".to_string()),
                ("w1".to_string(), "k2".to_string()),
                ("w2".to_string(), "k2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn duplicate_url_keeps_first_pair() {
        let shared = "https://shared.example.com/page";
        let source = ScriptedSource::new()
            .with_entries("w2", "k1", vec![ResultEntry::new("first", shared)])
            .with_entries("w1", "k2", vec![ResultEntry::new("second", shared)]);

        let results = SearchAggregator::default()
            .aggregate(
                &websites(&[("w1", "https://a.com"), ("w2", "https://b.com")]),
                &keywords(&[("k1", "one"), ("k2", "two")]),
                &source,
            )
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, shared);
        assert_eq!(results[0].title, "first");
        assert_eq!(pair_of(&results[0]), ("k1", "w2"));
    }

    #[tokio::test]
    async fn one_failing_pair_does_not_abort_run() {
        let source = ScriptedSource::new()
            .with_entries("w1", "k1", vec![ResultEntry::new("a", "/a")])
            .with_failure("w2", "k1", "provider exploded")
            .with_entries("w1", "k2", vec![ResultEntry::new("c", "/c")])
            .with_entries("w2", "k2", vec![ResultEntry::new("d", "/d")]);

        let results = SearchAggregator::default()
            .aggregate(
                &websites(&[("w1", "https://a.com"), ("w2", "https://b.com")]),
                &keywords(&[("k1", "one"), ("k2", "two")]),
                &source,
            )
            .await
            .unwrap();

        let order: Vec<_> = results.iter().map(pair_of).collect();
        assert_eq!(order, vec![("k1", "w1"), ("k2", "w1"), ("k2", "w2")]);
    }

    #[tokio::test]
    async fn every_pair_failing_is_still_ok() {
        let source = ScriptedSource::new()
            .with_failure("w1", "k1", "down")
            .with_failure("w1", "k2", "down");

        let results = SearchAggregator::default()
            .aggregate(
                &websites(&[("w1", "https://a.com")]),
                &keywords(&[("k1", "one"), ("k2", "two")]),
                &source,
            )
            .await
            .unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn timed_out_lookup_is_skipped() {
        let source = ScriptedSource::new()
            .with_entries("w1", "k1", vec![ResultEntry::new("slow", "/slow")])
            .with_delay("w1", "k1", Duration::from_secs(5))
            .with_entries("w2", "k1", vec![ResultEntry::new("fast", "/fast")]);

        let aggregator = SearchAggregator::new(
            AggregatorConfig::default().with_lookup_timeout(Duration::from_millis(50)),
        );
        let results = aggregator
            .aggregate(
                &websites(&[("w1", "https://a.com"), ("w2", "https://b.com")]),
                &keywords(&[("k1", "one")]),
                &source,
            )
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://b.com/fast");
    }

    #[tokio::test]
    async fn concurrent_fan_out_keeps_canonical_order() {
        // Earlier pairs finish last; collection must still be canonical.
        let source = ScriptedSource::new()
            .with_entries("w1", "k1", vec![ResultEntry::new("a", "https://dup.com/")])
            .with_delay("w1", "k1", Duration::from_millis(60))
            .with_entries("w2", "k1", vec![ResultEntry::new("b", "/b")])
            .with_delay("w2", "k1", Duration::from_millis(40))
            .with_entries("w1", "k2", vec![ResultEntry::new("c", "/c")])
            .with_delay("w1", "k2", Duration::from_millis(20))
            .with_entries("w2", "k2", vec![ResultEntry::new("d", "https://dup.com/")]);

        let aggregator = SearchAggregator::new(
            AggregatorConfig::default()
                .with_max_concurrency(4)
                .with_lookup_timeout(Duration::from_secs(2)),
        );
        let results = aggregator
            .aggregate(
                &websites(&[("w1", "https://a.com"), ("w2", "https://b.com")]),
                &keywords(&[("k1", "one"), ("k2", "two")]),
                &source,
            )
            .await
            .unwrap();

        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn malformed_entries_are_skipped() {
        let source = ScriptedSource::new().with_entries(
            "w1",
            "k1",
            vec![
                ResultEntry::new("blank", "   "),
                ResultEntry::new("ftp", "ftp://files.example.com/x"),
                ResultEntry::new("ok", "/ok"),
            ],
        );

        let results = SearchAggregator::default()
            .aggregate(
                &websites(&[("w1", "https://a.com")]),
                &keywords(&[("k1", "one")]),
                &source,
            )
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://a.com/ok");
        assert!(results[0].id.starts_with("w1-k1-0-"));
    }

    #[tokio::test]
    async fn sequence_counts_across_pairs() {
        let source = ScriptedSource::new()
            .with_entries(
                "w1",
                "k1",
                vec![ResultEntry::new("a", "/a"), ResultEntry::new("b", "/b")],
            )
            .with_entries("w1", "k2", vec![ResultEntry::new("c", "/c")]);

        let results = SearchAggregator::default()
            .aggregate(
                &websites(&[("w1", "https://a.com")]),
                &keywords(&[("k1", "one"), ("k2", "two")]),
                &source,
            )
            .await
            .unwrap();

        let ts = results[0].created_at.timestamp_millis();
        let ids: Vec<_> = results.iter().map(|r| r.id.clone()).collect();
        assert_eq!(
            ids,
            vec![
                format!("w1-k1-0-{ts}"),
                format!("w1-k1-1-{ts}"),
                format!("w1-k2-2-{ts}"),
            ]
        );
    }

    #[tokio::test]
    async fn cancelled_before_start_returns_cancelled() {
        let source = ScriptedSource::new()
            .with_entries("w1", "k1", vec![ResultEntry::new("a", "/a")]);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = SearchAggregator::default()
            .aggregate_cancellable(
                &websites(&[("w1", "https://a.com")]),
                &keywords(&[("k1", "one")]),
                &source,
                &cancel,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AggregateError::Cancelled));
    }

    #[tokio::test]
    async fn cancelled_mid_run_discards_partial_results() {
        let source = ScriptedSource::new()
            .with_entries("w1", "k1", vec![ResultEntry::new("a", "/a")])
            .with_entries("w2", "k1", vec![ResultEntry::new("b", "/b")])
            .with_delay("w2", "k1", Duration::from_secs(5));
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            trigger.cancel();
        });

        let err = SearchAggregator::default()
            .aggregate_cancellable(
                &websites(&[("w1", "https://a.com"), ("w2", "https://b.com")]),
                &keywords(&[("k1", "one")]),
                &source,
                &cancel,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AggregateError::Cancelled));
    }

    #[tokio::test]
    async fn scheme_like_relative_paths_are_malformed() {
        let source = ScriptedSource::new().with_entries(
            "w1",
            "k1",
            vec![
                ResultEntry::new("wiki", "Category:Foo"),
                ResultEntry::new("port", "example.com:8080/p"),
                ResultEntry::new("rooted", "/Category:Foo"),
            ],
        );

        let results = SearchAggregator::default()
            .aggregate(
                &websites(&[("w1", "https://wiki.org")]),
                &keywords(&[("k1", "one")]),
                &source,
            )
            .await
            .unwrap();

        let urls: Vec<_> = results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["https://wiki.org/Category:Foo"]);
    }

    #[tokio::test]
    async fn run_deadline_skips_remaining_pairs() {
        let source = ScriptedSource::new()
            .with_entries("w1", "k1", vec![ResultEntry::new("a", "/a")])
            .with_entries("w2", "k1", vec![ResultEntry::new("b", "/b")])
            .with_delay("w2", "k1", Duration::from_secs(5))
            .with_entries("w3", "k1", vec![ResultEntry::new("c", "/c")])
            .with_delay("w3", "k1", Duration::from_secs(5));

        let aggregator = SearchAggregator::new(
            AggregatorConfig::default()
                .with_lookup_timeout(Duration::from_secs(2))
                .with_run_deadline(Duration::from_millis(100)),
        );
        let started = std::time::Instant::now();
        let results = aggregator
            .aggregate(
                &websites(&[
                    ("w1", "https://a.com"),
                    ("w2", "https://b.com"),
                    ("w3", "https://c.com"),
                ]),
                &keywords(&[("k1", "one")]),
                &source,
            )
            .await
            .unwrap();

        assert!(started.elapsed() < Duration::from_secs(1));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://a.com/a");
    }

    #[tokio::test]
    async fn aggregate_over_shared_dyn_source_is_send() {
        fn assert_send<T: Send>(value: T) -> T {
            value
        }

        let source: std::sync::Arc<dyn ResultSource> = std::sync::Arc::new(
            ScriptedSource::new().with_entries("w1", "k1", vec![ResultEntry::new("a", "/a")]),
        );
        let aggregator = SearchAggregator::default();
        let sites = websites(&[("w1", "https://a.com")]);
        let words = keywords(&[("k1", "one")]);

        let results = assert_send(aggregator.aggregate(&sites, &words, source.as_ref()))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);

        let spawned = tokio::spawn(async move {
            aggregator
                .aggregate(&sites, &words, source.as_ref())
                .await
                .map(|results| results.len())
        });
        assert_eq!(spawned.await.unwrap().unwrap(), 1);
    }

    #[test]
    fn join_url_handles_trailing_slash() {
        assert_eq!(join_url("https://a.com/", "/x"), "https://a.com/x");
        assert_eq!(join_url("https://a.com", "/x"), "https://a.com/x");
        assert_eq!(join_url("https://a.com", "x"), "https://a.com/x");
        assert_eq!(join_url("https://a.com//", "//x"), "https://a.com/x");
    }

    #[test]
    fn join_url_passes_absolute_urls_through() {
        assert_eq!(
            join_url("https://a.com", "https://b.com/y"),
            "https://b.com/y"
        );
    }

    #[test]
    fn dedup_is_stable() {
        let make = |id: &str, url: &str| SearchResult {
            id: id.into(),
            title: id.into(),
            url: url.into(),
            snippet: None,
            website_id: "w".into(),
            keyword_id: "k".into(),
            created_at: Utc::now(),
        };

        let deduped = dedup_by_url(vec![
            make("1", "https://a.com/x"),
            make("2", "https://a.com/y"),
            make("3", "https://a.com/x"),
            make("4", "https://a.com/z"),
            make("5", "https://a.com/y"),
        ]);

        let ids: Vec<_> = deduped.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4"]);
    }
}
