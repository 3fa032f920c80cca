//! Query submission routing

use super::Engine;
use crate::enhancement::enhanced_or_raw;
use crate::error::EngineError;
use crate::navigation::build_search_url;
use crate::sink::SearchQuery;

impl Engine {
    /// Commit a query to exactly one sink
    ///
    /// An empty text is ignored unless this is a reset. Resets never navigate.
    pub async fn submit(&mut self, text: &str, is_reset: bool) -> Result<(), EngineError> {
        if text.is_empty() && !is_reset {
            log::debug!("Ignoring empty submission");
            return Ok(());
        }

        let mut query = SearchQuery::new(text);
        self.state.input = text.to_string();
        self.state.show_clear_button = !is_reset;

        if self.config.enable_enhancement && !text.is_empty() {
            match self.enhancer.clone() {
                Some(enhancer) => {
                    let result = enhancer.enhance(text, self.config.is_staging).await;
                    let (enhanced, payload) = enhanced_or_raw(text, result);
                    query.enhanced = enhanced;
                    if payload.is_some() {
                        self.state.last_enhancement = payload;
                    }
                }
                None => log::debug!("Enhancement enabled but no enhancer configured"),
            }
        }

        if self.config.search_in_new_page && !is_reset {
            let url = build_search_url(
                self.config.page_url.as_deref(),
                &query.raw,
                self.config.query_path_behavior,
                &self.config.query_string_parameter,
            )?;
            log::debug!("Navigating to {}", url);
            self.navigator.open(&url, self.config.open_behavior)?;
        } else {
            self.sink.on_search(query);
        }

        Ok(())
    }
}
