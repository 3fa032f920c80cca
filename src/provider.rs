//! Suggestion provider abstraction
//!
//! Providers are owned outside the engine. The engine only reads their enabled
//! flag and capabilities and calls the two fetch operations; it never mutates
//! a provider. The external owner may replace the whole set at any time.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use thiserror::Error;

use crate::suggestion::Suggestion;

mod static_provider;

pub use static_provider::StaticProvider;

/// Errors that can occur while a provider fetches suggestions
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider could not reach its backend
    #[error("[{provider}] Network error: {message}")]
    Network { provider: String, message: String },

    /// Provider answered but the fetch failed
    #[error("[{provider}] Fetch failed: {message}")]
    Failed { provider: String, message: String },
}

/// What a provider can answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub term_suggestions: bool,
    pub zero_term_suggestions: bool,
}

/// A pluggable source of suggestions
pub trait SuggestionProvider: Send + Sync {
    /// Stable identity of the provider
    fn name(&self) -> &str;

    /// Controlled by the provider's owner
    fn is_enabled(&self) -> bool;

    fn capabilities(&self) -> Capabilities;

    /// Suggestions for a non-empty term
    fn fetch_suggestions<'a>(
        &'a self,
        term: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Suggestion>, ProviderError>>;

    /// Suggestions shown while the input is empty
    fn fetch_zero_term_suggestions(&self) -> BoxFuture<'_, Result<Vec<Suggestion>, ProviderError>>;
}

/// Structural description of a provider, used to detect set changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSignature {
    pub name: String,
    pub enabled: bool,
    pub capabilities: Capabilities,
}

/// Ordered set of providers
///
/// Two sets are equal when their signatures match position by position; the
/// provider objects themselves are not compared.
#[derive(Clone, Default)]
pub struct ProviderSet {
    providers: Vec<Arc<dyn SuggestionProvider>>,
}

impl ProviderSet {
    pub fn new(providers: Vec<Arc<dyn SuggestionProvider>>) -> Self {
        Self { providers }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn signature(&self) -> Vec<ProviderSignature> {
        self.providers
            .iter()
            .map(|p| ProviderSignature {
                name: p.name().to_string(),
                enabled: p.is_enabled(),
                capabilities: p.capabilities(),
            })
            .collect()
    }

    /// Enabled providers that answer term suggestions, with their position
    pub fn term_eligible(&self) -> Vec<(usize, Arc<dyn SuggestionProvider>)> {
        self.eligible(|c| c.term_suggestions)
    }

    /// Enabled providers that answer zero-term suggestions, with their position
    pub fn zero_term_eligible(&self) -> Vec<(usize, Arc<dyn SuggestionProvider>)> {
        self.eligible(|c| c.zero_term_suggestions)
    }

    fn eligible(
        &self,
        supports: impl Fn(&Capabilities) -> bool,
    ) -> Vec<(usize, Arc<dyn SuggestionProvider>)> {
        self.providers
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_enabled() && supports(&p.capabilities()))
            .map(|(slot, p)| (slot, Arc::clone(p)))
            .collect()
    }
}

impl PartialEq for ProviderSet {
    fn eq(&self, other: &Self) -> bool {
        self.providers.len() == other.providers.len() && self.signature() == other.signature()
    }
}

impl fmt::Debug for ProviderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSet")
            .field("providers", &self.signature())
            .finish()
    }
}

impl FromIterator<Arc<dyn SuggestionProvider>> for ProviderSet {
    fn from_iter<I: IntoIterator<Item = Arc<dyn SuggestionProvider>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
