use thiserror::Error;

use crate::config::ConfigError;
use crate::navigation::NavigationError;

/// Errors surfaced by engine operations
///
/// Provider, enhancement and selection-handler failures never show up here:
/// they are recovered inside the engine with fallback values.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Navigation failed: {0}")]
    Navigation(#[from] NavigationError),

    #[error("No suggestion at position {index} ({available} available)")]
    NoSuchSuggestion { index: usize, available: usize },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
