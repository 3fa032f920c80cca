//! Suggestion selection

use super::Engine;
use crate::config::OpenBehavior;
use crate::error::EngineError;
use crate::navigation::parse_url;
use crate::suggestion::{Suggestion, strip_highlight_markup};

impl Engine {
    /// Select a suggestion by its position in the grouped listing
    pub async fn select_suggestion(&mut self, index: usize) -> Result<(), EngineError> {
        let grouped = self.state.grouped();
        let suggestion = grouped
            .get(index)
            .cloned()
            .ok_or(EngineError::NoSuchSuggestion {
                index,
                available: grouped.len(),
            })?;
        self.on_suggestion_selected(suggestion).await
    }

    /// Apply a selected suggestion
    ///
    /// Links open in a new tab and reset the box; anything else replaces the
    /// term in the input and is submitted as a query.
    pub async fn on_suggestion_selected(
        &mut self,
        suggestion: Suggestion,
    ) -> Result<(), EngineError> {
        let replaced = self.replace_from_term(&suggestion.display_text);

        if let Some(handler) = &suggestion.on_selected
            && let Err(e) = handler.call(&suggestion)
        {
            log::error!("{}", e);
        }

        if let Some(target) = suggestion.target_url.clone() {
            let duplicate = self
                .state
                .last_suggestion_clicked
                .as_ref()
                .is_some_and(|last| last.same_link_as(&suggestion));

            let opened = if duplicate {
                log::debug!("Suppressing repeated open of {}", target);
                Ok(())
            } else {
                parse_url(&target).and_then(|url| self.navigator.open(&url, OpenBehavior::NewTab))
            };

            self.state.last_suggestion_clicked = Some(suggestion);
            self.reset_input();
            return opened.map_err(EngineError::from);
        }

        self.debouncer.cancel();
        self.state.input = replaced.clone();
        self.state.proposed.clear();
        self.state.live_batch = None;
        self.state.term_in_flight = false;
        self.state.selected_history.push(suggestion);
        self.submit(&replaced, false).await
    }

    /// Input with everything from the suggested term onward replaced
    fn replace_from_term(&self, display_text: &str) -> String {
        let term = self.state.term_to_suggest_from.as_deref().unwrap_or("");
        let start = self.state.input.find(term).unwrap_or(0);
        let mut replaced = self.state.input[..start].to_string();
        replaced.push_str(display_text);
        strip_highlight_markup(&replaced)
    }

    /// Empty the box without notifying the query sink
    fn reset_input(&mut self) {
        self.debouncer.cancel();
        self.state.input.clear();
        self.state.show_clear_button = false;
        self.handle_debounced_input(String::new());
    }
}
