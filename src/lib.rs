//! Search suggestion orchestration
//!
//! A [`Engine`] debounces keystrokes, fans each term out to a set of pluggable
//! [`SuggestionProvider`]s, discards results for terms the user has already
//! moved past, caches the zero-term suggestion set and routes committed
//! queries either to a local [`QuerySink`] or to a search page via a
//! [`Navigator`].

pub mod cli;
pub mod config;
pub mod debouncer;
pub mod engine;
pub mod enhancement;
pub mod error;
pub mod navigation;
pub mod provider;
pub mod sink;
pub mod suggestion;


pub use config::{Config, EngineConfig, OpenBehavior, QueryPathBehavior};
pub use engine::{Command, Engine, EngineBuilder, EngineState};
pub use enhancement::{EnhancedQuery, EnhancementError, HttpEnhancer, QueryEnhancer};
pub use error::EngineError;
pub use navigation::{NavigationError, Navigator};
pub use provider::{Capabilities, ProviderError, ProviderSet, StaticProvider, SuggestionProvider};
pub use sink::{QuerySink, SearchQuery};
pub use suggestion::{GroupedSuggestions, SelectionHandler, Suggestion, SuggestionKind};
