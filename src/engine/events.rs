//! Commands accepted by the engine and events produced by its provider tasks

use crate::provider::{ProviderError, ProviderSet};
use crate::suggestion::Suggestion;

/// Input from the host (keyboard, buttons, owner updates)
#[derive(Debug)]
pub enum Command {
    /// A keystroke changed the input text
    InputChanged(String),
    /// Enter: submit the current input
    Submit,
    /// Escape or clear button: empty the box and notify the sink
    Reset,
    /// Select a suggestion by its flat index in the grouped listing
    SelectSuggestion(usize),
    /// The owner swapped the provider set
    ProvidersChanged(ProviderSet),
    /// The owner set a new (percent-encoded) input value
    SetInputValue(String),
    DismissError,
}

/// The term and batch a result was requested for
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BatchTag {
    pub id: u64,
    pub term: String,
}

/// Results flowing back from spawned provider tasks
#[derive(Debug)]
pub(crate) enum EngineEvent {
    /// One provider answered (or failed) for a term batch
    TermResolved {
        tag: BatchTag,
        slot: usize,
        result: Result<Vec<Suggestion>, ProviderError>,
    },
    /// A provider task ended without producing a result
    TermProviderAborted { tag: BatchTag, message: String },
    /// Every provider in the batch has settled
    TermBatchSettled { tag: BatchTag },
    /// All zero-term providers settled; results in provider order
    ZeroTermSettled {
        generation: u64,
        results: Vec<Vec<Suggestion>>,
    },
}
