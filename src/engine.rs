//! Search suggestion engine
//!
//! Owns the [`EngineState`] of one search box. Keystrokes are debounced, then
//! fanned out to every eligible provider on spawned tasks. Provider results come
//! back as events tagged with the batch and term they were requested for, and
//! are only merged while that batch is live and its term still equals the
//! current input. Obsolete requests still run to completion; their results are
//! dropped on arrival.

mod dispatch;
mod events;
mod selection;
mod state;
mod submit;
mod zero_term;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::config::{self, EngineConfig, OpenBehavior};
use crate::debouncer::Debouncer;
use crate::enhancement::QueryEnhancer;
use crate::error::EngineError;
use crate::navigation::{NavigationError, Navigator, decode_input_value};
use crate::provider::ProviderSet;
use crate::sink::{QuerySink, SearchQuery};

pub use events::Command;
pub use state::EngineState;

use events::EngineEvent;

/// Builder for [`Engine`]
pub struct EngineBuilder {
    config: EngineConfig,
    providers: ProviderSet,
    enhancer: Option<Arc<dyn QueryEnhancer>>,
    sink: Box<dyn QuerySink>,
    navigator: Box<dyn Navigator>,
}

impl EngineBuilder {
    pub fn providers(mut self, providers: ProviderSet) -> Self {
        self.providers = providers;
        self
    }

    pub fn enhancer(mut self, enhancer: Arc<dyn QueryEnhancer>) -> Self {
        self.enhancer = Some(enhancer);
        self
    }

    pub fn on_search(mut self, sink: impl QuerySink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Box::new(navigator);
        self
    }

    /// Validate the configuration and create the engine
    pub fn build(self) -> Result<Engine, EngineError> {
        config::validate(&self.config)?;

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Ok(Engine {
            debouncer: Debouncer::new(self.config.debounce_ms),
            config: self.config,
            providers: self.providers,
            enhancer: self.enhancer,
            sink: self.sink,
            navigator: self.navigator,
            state: EngineState::default(),
            events_tx,
            events_rx,
            next_batch_id: 0,
            outstanding: 0,
            mounted: false,
            shutdown: CancellationToken::new(),
        })
    }
}

/// Suggestion orchestration for a single search box
pub struct Engine {
    config: EngineConfig,
    providers: ProviderSet,
    enhancer: Option<Arc<dyn QueryEnhancer>>,
    sink: Box<dyn QuerySink>,
    navigator: Box<dyn Navigator>,
    state: EngineState,
    debouncer: Debouncer,
    events_tx: mpsc::UnboundedSender<EngineEvent>,
    events_rx: mpsc::UnboundedReceiver<EngineEvent>,
    next_batch_id: u64,
    /// Spawned batches whose final event has not been received yet
    outstanding: usize,
    mounted: bool,
    shutdown: CancellationToken,
}

/// What woke the engine loop
enum Step {
    Command(Option<Command>),
    Event(EngineEvent),
    Debounce,
}

impl Engine {
    pub fn builder(config: EngineConfig) -> EngineBuilder {
        EngineBuilder {
            config,
            providers: ProviderSet::default(),
            enhancer: None,
            sink: Box::new(drop_search),
            navigator: Box::new(refuse_navigation),
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn providers(&self) -> &ProviderSet {
        &self.providers
    }

    /// Initialise the input value and pre-warm the zero-term cache
    ///
    /// Must be called from within a Tokio runtime. Calling it again is a no-op.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        if let Some(raw) = self.config.initial_input.clone() {
            self.state.input = decode_input_value(&raw);
        }
        self.state.show_clear_button = !self.state.input.is_empty();

        if self.config.enable_suggestions {
            self.ensure_zero_term_suggestions(false);
        }
    }

    /// Apply a host command
    pub async fn handle(&mut self, command: Command) -> Result<(), EngineError> {
        match command {
            Command::InputChanged(text) => {
                self.on_input_changed(text);
                Ok(())
            }
            Command::Submit => {
                let text = self.state.input.clone();
                self.submit(&text, false).await
            }
            Command::Reset => {
                self.debouncer.cancel();
                self.submit("", true).await?;
                self.handle_debounced_input(String::new());
                Ok(())
            }
            Command::SelectSuggestion(index) => self.select_suggestion(index).await,
            Command::ProvidersChanged(providers) => {
                self.set_providers(providers);
                Ok(())
            }
            Command::SetInputValue(raw) => {
                self.debouncer.cancel();
                self.abandon_term_batch();
                self.state.input = decode_input_value(&raw);
                self.state.show_clear_button = !self.state.input.is_empty();
                Ok(())
            }
            Command::DismissError => {
                self.state.error_message = None;
                Ok(())
            }
        }
    }

    /// Keystroke handler
    ///
    /// The displayed text, clear button and loading flag update immediately;
    /// only the suggestion lookup is debounced.
    pub fn on_input_changed(&mut self, text: String) {
        self.state.input = text.clone();
        self.state.show_clear_button = true;

        if self.config.enable_suggestions {
            self.state.term_in_flight = true;
            self.debouncer.schedule(text, Instant::now());
        }
    }

    /// Replace the provider set, refreshing the zero-term cache if it changed
    pub fn set_providers(&mut self, providers: ProviderSet) {
        let changed = providers != self.providers;
        self.providers = providers;

        if changed {
            log::debug!("Provider set changed, refreshing zero-term suggestions");
            self.ensure_zero_term_suggestions(true);
        }
    }

    /// Run the debounced handler now if the quiet window has elapsed
    pub fn fire_debounce(&mut self, now: Instant) {
        if let Some(text) = self.debouncer.poll(now) {
            log::debug!("Debounced input '{}'", text);
            self.handle_debounced_input(text);
        }
    }

    /// Apply every provider event that has already arrived
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    /// Deliver any pending keystroke immediately and wait until no provider
    /// batch is outstanding
    pub async fn settle(&mut self) {
        if let Some(text) = self.debouncer.flush() {
            self.handle_debounced_input(text);
        }

        while self.outstanding > 0 {
            match self.events_rx.recv().await {
                Some(event) => self.apply_event(event),
                None => break,
            }
        }
    }

    /// Drive the engine until the command channel closes
    ///
    /// Mounts the engine first. Returns the engine so the caller can inspect
    /// its final state.
    pub async fn run(mut self, mut commands: mpsc::Receiver<Command>) -> Self {
        self.mount();

        loop {
            let deadline = self.debouncer.deadline();
            let step = tokio::select! {
                command = commands.recv() => Step::Command(command),
                Some(event) = self.events_rx.recv() => Step::Event(event),
                _ = sleep_until(deadline) => Step::Debounce,
            };

            match step {
                Step::Command(Some(command)) => {
                    if let Err(e) = self.handle(command).await {
                        log::error!("Search box command failed: {}", e);
                    }
                }
                Step::Command(None) => break,
                Step::Event(event) => self.apply_event(event),
                Step::Debounce => self.fire_debounce(Instant::now()),
            }
        }

        log::debug!("Search engine shutting down");
        self
    }

    fn apply_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::TermResolved { tag, slot, result } => {
                self.apply_term_result(tag, slot, result)
            }
            EngineEvent::TermProviderAborted { tag, message } => {
                self.apply_term_abort(tag, message)
            }
            EngineEvent::TermBatchSettled { tag } => {
                self.outstanding = self.outstanding.saturating_sub(1);
                self.apply_term_settled(tag);
            }
            EngineEvent::ZeroTermSettled {
                generation,
                results,
            } => {
                self.outstanding = self.outstanding.saturating_sub(1);
                self.apply_zero_term(generation, results);
            }
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn drop_search(query: SearchQuery) {
    log::debug!("No query sink configured, dropping '{}'", query.raw);
}

fn refuse_navigation(url: &Url, _behavior: OpenBehavior) -> Result<(), NavigationError> {
    Err(NavigationError::Open {
        url: url.to_string(),
        message: "no navigator configured".to_string(),
    })
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
