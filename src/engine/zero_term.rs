//! Zero-term suggestion cache

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::Engine;
use super::events::EngineEvent;
use crate::provider::SuggestionProvider;
use crate::suggestion::Suggestion;

impl Engine {
    /// Populate the zero-term cache
    ///
    /// Without `force` this is a no-op once the cache is populated or while a
    /// fetch is running. A forced refresh drops the cached set and supersedes
    /// any running fetch.
    pub fn ensure_zero_term_suggestions(&mut self, force: bool) {
        if !force && (self.state.zero_term_populated || self.state.zero_term_in_flight) {
            log::debug!("Zero-term suggestions already cached or loading");
            return;
        }

        if force {
            // The cached set belongs to the previous providers
            self.state.zero_term_cache.clear();
            self.state.zero_term_populated = false;
            if self.state.input.is_empty() {
                self.state.proposed.clear();
            }
        }

        self.state.zero_term_generation += 1;
        let generation = self.state.zero_term_generation;
        let eligible = self.providers.zero_term_eligible();

        if eligible.is_empty() {
            log::debug!("No provider supports zero-term suggestions");
            self.state.zero_term_cache.clear();
            self.state.zero_term_populated = true;
            self.state.zero_term_in_flight = false;
            if self.state.input.is_empty() {
                self.state.proposed.clear();
            }
            return;
        }

        self.state.zero_term_in_flight = true;
        self.outstanding += 1;
        spawn_zero_term_fetch(
            generation,
            eligible,
            self.events_tx.clone(),
            self.shutdown.child_token(),
        );
    }

    /// Show the cached zero-term set, loading it first if needed
    pub(super) fn show_zero_term(&mut self) {
        if self.state.zero_term_populated {
            log::debug!("Zero-term cache hit");
            self.state.proposed = self.state.zero_term_cache.clone();
        } else {
            self.state.proposed.clear();
            self.ensure_zero_term_suggestions(false);
        }
    }

    pub(super) fn apply_zero_term(&mut self, generation: u64, results: Vec<Vec<Suggestion>>) {
        if generation != self.state.zero_term_generation {
            log::debug!("Discarding superseded zero-term fetch {}", generation);
            return;
        }

        self.state.zero_term_cache = results.concat();
        self.state.zero_term_populated = true;
        self.state.zero_term_in_flight = false;

        if self.state.input.is_empty() {
            self.state.proposed = self.state.zero_term_cache.clone();
        }
    }
}

fn spawn_zero_term_fetch(
    generation: u64,
    eligible: Vec<(usize, Arc<dyn SuggestionProvider>)>,
    events: mpsc::UnboundedSender<EngineEvent>,
    shutdown: CancellationToken,
) {
    tokio::spawn(async move {
        let (names, handles): (Vec<String>, Vec<_>) = eligible
            .into_iter()
            .map(|(_, provider)| {
                let name = provider.name().to_string();
                let handle =
                    tokio::spawn(async move { provider.fetch_zero_term_suggestions().await });
                (name, handle)
            })
            .unzip();
        let aborts: Vec<_> = handles.iter().map(|h| h.abort_handle()).collect();

        let joined = tokio::select! {
            _ = shutdown.cancelled() => {
                for abort in &aborts {
                    abort.abort();
                }
                return;
            }
            joined = join_all(handles) => joined,
        };

        let results = names
            .iter()
            .zip(joined)
            .map(|(name, outcome)| match outcome {
                Ok(Ok(suggestions)) => suggestions,
                Ok(Err(e)) => {
                    log::warn!("Zero-term fetch failed: {}", e);
                    Vec::new()
                }
                Err(e) => {
                    log::warn!("Zero-term provider '{}' stopped: {}", name, e);
                    Vec::new()
                }
            })
            .collect();

        let _ = events.send(EngineEvent::ZeroTermSettled {
            generation,
            results,
        });
    });
}
