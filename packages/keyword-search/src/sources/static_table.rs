use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::traits::source::ResultSource;
use crate::types::{Keyword, ResultEntry, Website};

/// One row of a static table: entries returned for keywords containing
/// `pattern` (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRule {
    pub pattern: String,
    pub results: Vec<ResultEntry>,
}

impl StaticRule {
    pub fn new(pattern: impl Into<String>, results: Vec<ResultEntry>) -> Self {
        Self {
            pattern: pattern.into(),
            results,
        }
    }

    fn matches(&self, keyword: &str) -> bool {
        let pattern = self.pattern.trim().to_lowercase();
        !pattern.is_empty() && keyword.contains(&pattern)
    }
}

/// Looks keywords up in a fixed table by substring match.
///
/// Every matching rule contributes its entries, in rule order. Entry URLs
/// are usually relative so the same table works for any website.
#[derive(Debug, Clone)]
pub struct StaticTableSource {
    rules: Vec<StaticRule>,
}

impl StaticTableSource {
    pub fn new(rules: Vec<StaticRule>) -> Self {
        Self { rules }
    }

    /// Parse a table from JSON: `[{"pattern": "...", "results": [...]}]`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let rules: Vec<StaticRule> = serde_json::from_str(json)?;
        Ok(Self::new(rules))
    }

    pub fn rules(&self) -> &[StaticRule] {
        &self.rules
    }
}

impl Default for StaticTableSource {
    fn default() -> Self {
        let rule = |pattern: &str, title: &str, path: &str, snippet: &str| {
            StaticRule::new(
                pattern,
                vec![ResultEntry::new(title, path).with_snippet(snippet)],
            )
        };

        Self::new(vec![
            rule("contact", "Contact", "/contact", "How to get in touch"),
            rule("about", "About us", "/about", "Who we are and what we do"),
            rule("price", "Pricing", "/pricing", "Plans and prices"),
            rule("news", "News", "/blog", "Latest announcements"),
            rule("blog", "Blog", "/blog", "Latest announcements"),
            rule("help", "Help center", "/support", "Answers to common questions"),
            rule("support", "Support", "/support", "Answers to common questions"),
            rule("job", "Careers", "/careers", "Open positions"),
            rule("career", "Careers", "/careers", "Open positions"),
        ])
    }
}

#[async_trait]
impl ResultSource for StaticTableSource {
    async fn lookup(
        &self,
        _website: &Website,
        keyword: &Keyword,
    ) -> Result<Vec<ResultEntry>, LookupError> {
        let needle = keyword.keyword.to_lowercase();

        Ok(self
            .rules
            .iter()
            .filter(|rule| rule.matches(&needle))
            .flat_map(|rule| rule.results.iter().cloned())
            .collect())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
