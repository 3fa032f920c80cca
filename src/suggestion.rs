//! Suggestion value types
//!
//! Suggestions are produced by providers and never mutated afterwards. The
//! engine clones them into its proposed list, cache and selection history.

pub mod grouping;
pub mod markup;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

pub use grouping::{DEFAULT_GROUP_NAME, GroupedSuggestions, SuggestionGroup, group_suggestions};
pub use markup::strip_highlight_markup;

/// Failure reported by a suggestion's custom selection handler
#[derive(Debug, Error)]
#[error("Selection handler failed: {0}")]
pub struct SelectionHandlerError(pub String);

type HandlerFn = dyn Fn(&Suggestion) -> Result<(), SelectionHandlerError> + Send + Sync;

/// Custom callback invoked when a suggestion is selected
#[derive(Clone)]
pub struct SelectionHandler(Arc<HandlerFn>);

impl SelectionHandler {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Suggestion) -> Result<(), SelectionHandlerError> + Send + Sync + 'static,
    {
        Self(Arc::new(handler))
    }

    pub fn call(&self, suggestion: &Suggestion) -> Result<(), SelectionHandlerError> {
        (self.0)(suggestion)
    }
}

impl fmt::Debug for SelectionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SelectionHandler")
    }
}

/// Variant of a suggestion
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuggestionKind {
    /// Plain text suggestion
    #[default]
    Text,
    /// A person, shown with job title and email under the name
    Person {
        job_title: Option<String>,
        email: Option<String>,
    },
}

/// A single suggestion returned by a provider
#[derive(Debug, Clone, Default)]
pub struct Suggestion {
    /// Label to display; may contain `<B>` highlight markup
    pub display_text: String,
    /// Group heading; blank or missing means the default group
    pub group_name: Option<String>,
    pub kind: SuggestionKind,
    /// Icon URL or reference
    pub icon: Option<String>,
    /// When set, selecting the suggestion opens this URL instead of searching
    pub target_url: Option<String>,
    pub on_selected: Option<SelectionHandler>,
}

impl Suggestion {
    /// Create a text suggestion with no group
    pub fn text(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            ..Self::default()
        }
    }

    /// Create a person suggestion
    pub fn person(
        display_text: impl Into<String>,
        job_title: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            display_text: display_text.into(),
            kind: SuggestionKind::Person { job_title, email },
            ..Self::default()
        }
    }

    pub fn with_group(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_target_url(mut self, target_url: impl Into<String>) -> Self {
        self.target_url = Some(target_url.into());
        self
    }

    pub fn with_handler(mut self, handler: SelectionHandler) -> Self {
        self.on_selected = Some(handler);
        self
    }

    /// Group this suggestion is listed under
    pub fn effective_group(&self) -> &str {
        self.group_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_GROUP_NAME)
    }

    /// Whether this suggestion is presented as a link
    pub fn is_link(&self) -> bool {
        self.target_url.is_some()
    }

    /// Display text with highlight markup removed
    pub fn plain_text(&self) -> String {
        strip_highlight_markup(&self.display_text)
    }

    /// Second line for person suggestions ("title | email")
    pub fn secondary_text(&self) -> Option<String> {
        match &self.kind {
            SuggestionKind::Text => None,
            SuggestionKind::Person { job_title, email } => {
                let fields: Vec<&str> = [job_title.as_deref(), email.as_deref()]
                    .into_iter()
                    .flatten()
                    .filter(|f| !f.is_empty())
                    .collect();
                if fields.is_empty() {
                    None
                } else {
                    Some(fields.join(" | "))
                }
            }
        }
    }

    /// A matching URL or a matching display text counts as the same link
    pub(crate) fn same_link_as(&self, other: &Suggestion) -> bool {
        self.target_url == other.target_url || self.display_text == other.display_text
    }
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
