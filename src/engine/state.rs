//! Engine state
//!
//! One instance per input control. Only the engine's own handlers mutate it.

use crate::enhancement::EnhancedQuery;
use crate::suggestion::{GroupedSuggestions, Suggestion, group_suggestions};

/// Term batch currently allowed to publish results
#[derive(Debug)]
pub(crate) struct LiveBatch {
    pub id: u64,
    pub term: String,
    /// Results per provider position, flattened in provider order
    pub buckets: Vec<Option<Vec<Suggestion>>>,
}

impl LiveBatch {
    pub fn new(id: u64, term: String, provider_count: usize) -> Self {
        Self {
            id,
            term,
            buckets: vec![None; provider_count],
        }
    }

    pub fn merge(&mut self, slot: usize, suggestions: Vec<Suggestion>) {
        if slot >= self.buckets.len() {
            self.buckets.resize(slot + 1, None);
        }
        self.buckets[slot] = Some(suggestions);
    }

    pub fn flatten(&self) -> Vec<Suggestion> {
        self.buckets.iter().flatten().flatten().cloned().collect()
    }
}

/// Observable state of the search box
#[derive(Debug, Default)]
pub struct EngineState {
    /// Displayed input text; also the authoritative term for the stale guard
    pub input: String,
    pub show_clear_button: bool,
    /// Term the current proposed suggestions were computed from
    pub term_to_suggest_from: Option<String>,
    pub proposed: Vec<Suggestion>,
    pub zero_term_cache: Vec<Suggestion>,
    pub zero_term_populated: bool,
    pub term_in_flight: bool,
    pub zero_term_in_flight: bool,
    /// User-visible, dismissible error message
    pub error_message: Option<String>,
    pub last_suggestion_clicked: Option<Suggestion>,
    /// Suggestions selected so far (non-link only)
    pub selected_history: Vec<Suggestion>,
    /// Payload of the last successful enhancement
    pub last_enhancement: Option<EnhancedQuery>,
    pub(crate) live_batch: Option<LiveBatch>,
    pub(crate) zero_term_generation: u64,
}

impl EngineState {
    /// Whether a loading indicator should be shown
    pub fn is_loading(&self) -> bool {
        (self.term_in_flight && self.proposed.is_empty())
            || (self.zero_term_in_flight && self.input.is_empty())
    }

    /// Proposed suggestions grouped for presentation
    pub fn grouped(&self) -> GroupedSuggestions {
        group_suggestions(&self.proposed)
    }

    /// Display texts of the proposed suggestions, in order
    pub fn proposed_texts(&self) -> Vec<&str> {
        self.proposed
            .iter()
            .map(|s| s.display_text.as_str())
            .collect()
    }
}
