//! Local query sink

/// A committed query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Text as typed (or selected)
    pub raw: String,
    /// Enhanced text; empty unless enhancement ran
    pub enhanced: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            enhanced: String::new(),
        }
    }
}

/// Receives committed queries when not searching in a new page
pub trait QuerySink: Send {
    fn on_search(&mut self, query: SearchQuery);
}

impl<F> QuerySink for F
where
    F: FnMut(SearchQuery) + Send,
{
    fn on_search(&mut self, query: SearchQuery) {
        self(query)
    }
}
