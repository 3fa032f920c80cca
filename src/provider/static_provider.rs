//! Provider backed by fixed lists
//!
//! Term suggestions are the configured entries containing the term (ASCII
//! case-insensitive), with the match highlighted. Zero-term suggestions are
//! returned as configured.

use futures::FutureExt;
use futures::future::BoxFuture;

use super::{Capabilities, ProviderError, SuggestionProvider};
use crate::config::ProviderConfig;
use crate::suggestion::Suggestion;
use crate::suggestion::markup::highlight_term;

/// A provider answering from in-memory lists
#[derive(Debug, Clone)]
pub struct StaticProvider {
    name: String,
    enabled: bool,
    group: Option<String>,
    suggestions: Vec<String>,
    zero_term: Vec<String>,
}

impl StaticProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            group: None,
            suggestions: Vec::new(),
            zero_term: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_zero_term<I, S>(mut self, zero_term: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.zero_term = zero_term.into_iter().map(Into::into).collect();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    fn make_suggestion(&self, label: String) -> Suggestion {
        let suggestion = Suggestion::text(label);
        match &self.group {
            Some(group) => suggestion.with_group(group.clone()),
            None => suggestion,
        }
    }

    /// Matching entries for a term, highlighted
    pub fn matches(&self, term: &str) -> Vec<Suggestion> {
        let needle = term.to_ascii_lowercase();
        self.suggestions
            .iter()
            .filter(|s| s.to_ascii_lowercase().contains(&needle))
            .map(|s| self.make_suggestion(highlight_term(s, term)))
            .collect()
    }
}

impl From<&ProviderConfig> for StaticProvider {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            name: config.name.clone(),
            enabled: config.enabled,
            group: config.group.clone(),
            suggestions: config.suggestions.clone(),
            zero_term: config.zero_term.clone(),
        }
    }
}

impl SuggestionProvider for StaticProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            term_suggestions: !self.suggestions.is_empty(),
            zero_term_suggestions: !self.zero_term.is_empty(),
        }
    }

    fn fetch_suggestions<'a>(
        &'a self,
        term: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Suggestion>, ProviderError>> {
        let suggestions = self.matches(term);
        async move { Ok(suggestions) }.boxed()
    }

    fn fetch_zero_term_suggestions(&self) -> BoxFuture<'_, Result<Vec<Suggestion>, ProviderError>> {
        let suggestions = self
            .zero_term
            .iter()
            .map(|label| self.make_suggestion(label.clone()))
            .collect();
        async move { Ok(suggestions) }.boxed()
    }
}
