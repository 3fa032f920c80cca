//! Term suggestion fan-out and the stale guard
//!
//! Each dispatched term gets a new batch id. Provider results are sent back as
//! events tagged with that id and term; [`Engine::apply_term_result`] merges
//! them only while the batch is live and its term still equals the input.

use std::sync::Arc;

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::Engine;
use super::events::{BatchTag, EngineEvent};
use super::state::LiveBatch;
use crate::provider::{ProviderError, SuggestionProvider};
use crate::suggestion::Suggestion;

impl Engine {
    /// Debounced input handler
    pub(crate) fn handle_debounced_input(&mut self, text: String) {
        if !self.config.enable_suggestions {
            self.state.proposed.clear();
            return;
        }

        if text.is_empty() {
            self.abandon_term_batch();
            self.state.term_to_suggest_from = None;
            self.show_zero_term();
            return;
        }

        if text.chars().count() < self.config.minimum_trigger_length {
            log::debug!("Term '{}' below trigger length", text);
            self.abandon_term_batch();
            self.state.proposed.clear();
            return;
        }

        self.dispatch(text);
    }

    /// Fan a term out to every enabled provider supporting term suggestions
    pub(crate) fn dispatch(&mut self, term: String) {
        let eligible = self.providers.term_eligible();

        self.next_batch_id += 1;
        let tag = BatchTag {
            id: self.next_batch_id,
            term,
        };

        self.state.term_in_flight = true;
        self.state.error_message = None;
        self.state.proposed.clear();
        self.state.live_batch = Some(LiveBatch::new(
            tag.id,
            tag.term.clone(),
            self.providers.len(),
        ));

        if eligible.is_empty() {
            log::debug!("No provider supports term suggestions");
            self.state.term_in_flight = false;
            return;
        }

        log::debug!(
            "Dispatching batch {} for '{}' to {} provider(s)",
            tag.id,
            tag.term,
            eligible.len()
        );
        self.outstanding += 1;
        spawn_term_batch(
            tag,
            eligible,
            self.events_tx.clone(),
            self.shutdown.child_token(),
        );
    }

    pub(super) fn abandon_term_batch(&mut self) {
        self.state.live_batch = None;
        self.state.term_in_flight = false;
    }

    fn is_live(&self, tag: &BatchTag) -> bool {
        self.state
            .live_batch
            .as_ref()
            .is_some_and(|batch| batch.id == tag.id)
            && tag.term == self.state.input
    }

    pub(super) fn apply_term_result(
        &mut self,
        tag: BatchTag,
        slot: usize,
        result: Result<Vec<Suggestion>, ProviderError>,
    ) {
        let suggestions = match result {
            Ok(suggestions) => suggestions,
            Err(e) => {
                log::warn!("Suggestion provider failed for '{}': {}", tag.term, e);
                return;
            }
        };

        if !self.is_live(&tag) {
            log::debug!(
                "Discarding stale suggestions for '{}' (input is '{}')",
                tag.term,
                self.state.input
            );
            return;
        }

        if let Some(batch) = self.state.live_batch.as_mut() {
            batch.merge(slot, suggestions);
            self.state.proposed = batch.flatten();
        }
        self.state.term_to_suggest_from = Some(tag.term);
    }

    pub(super) fn apply_term_abort(&mut self, tag: BatchTag, message: String) {
        if !self.is_live(&tag) {
            log::debug!("Ignoring aborted provider for stale term '{}'", tag.term);
            return;
        }

        log::error!("Suggestion batch for '{}' failed: {}", tag.term, message);
        self.state.error_message = Some(format!("Could not load suggestions: {}", message));
        self.state.proposed.clear();
        self.abandon_term_batch();
    }

    pub(super) fn apply_term_settled(&mut self, tag: BatchTag) {
        if self
            .state
            .live_batch
            .as_ref()
            .is_some_and(|batch| batch.id == tag.id)
            && !self.debouncer.is_pending()
        {
            self.state.term_in_flight = false;
        }
    }
}

/// Run every provider on its own task and report each result as it arrives
fn spawn_term_batch(
    tag: BatchTag,
    eligible: Vec<(usize, Arc<dyn SuggestionProvider>)>,
    events: mpsc::UnboundedSender<EngineEvent>,
    shutdown: CancellationToken,
) {
    tokio::spawn(async move {
        let mut pending = FuturesUnordered::new();
        let mut aborts = Vec::with_capacity(eligible.len());

        for (slot, provider) in eligible {
            let term = tag.term.clone();
            let name = provider.name().to_string();
            let handle =
                tokio::spawn(async move { provider.fetch_suggestions(&term).await });
            aborts.push(handle.abort_handle());
            pending.push(async move { (slot, name, handle.await) });
        }

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    for abort in &aborts {
                        abort.abort();
                    }
                    return;
                }
                next = pending.next() => {
                    let event = match next {
                        Some((slot, _, Ok(result))) => EngineEvent::TermResolved {
                            tag: tag.clone(),
                            slot,
                            result,
                        },
                        Some((_, name, Err(e))) => EngineEvent::TermProviderAborted {
                            tag: tag.clone(),
                            message: format!("provider '{}' stopped: {}", name, e),
                        },
                        None => break,
                    };
                    // Receiver gone means the engine was dropped
                    if events.send(event).is_err() {
                        return;
                    }
                }
            }
        }

        let _ = events.send(EngineEvent::TermBatchSettled { tag });
    });
}
