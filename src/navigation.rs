//! URL-based query sink
//!
//! Builds the destination URL for "search in new page" mode and hands it to a
//! [`Navigator`], which decides what opening a URL means for the host.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use thiserror::Error;
use url::Url;

use crate::config::{OpenBehavior, QueryPathBehavior};

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Errors raised while building or opening a navigation target
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("search in new page is enabled but no page URL is configured")]
    MissingPageUrl,

    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to open {url}: {message}")]
    Open { url: String, message: String },
}

/// Opens URLs on behalf of the engine
pub trait Navigator: Send {
    fn open(&mut self, url: &Url, behavior: OpenBehavior) -> Result<(), NavigationError>;
}

impl<F> Navigator for F
where
    F: FnMut(&Url, OpenBehavior) -> Result<(), NavigationError> + Send,
{
    fn open(&mut self, url: &Url, behavior: OpenBehavior) -> Result<(), NavigationError> {
        self(url, behavior)
    }
}

/// Percent-encode text the way `encodeURIComponent` does
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Decode a percent-encoded input value
///
/// Malformed input (invalid UTF-8 after decoding) is returned unchanged.
pub fn decode_input_value(raw: &str) -> String {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// Parse a URL, mapping failures to NavigationError
pub fn parse_url(url: &str) -> Result<Url, NavigationError> {
    Url::parse(url).map_err(|e| NavigationError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Build the search page URL carrying the raw query text
///
/// The page URL is copied; in fragment mode the encoded text replaces the
/// fragment, otherwise `parameter=<text>` is appended to the query string.
pub fn build_search_url(
    page_url: Option<&str>,
    text: &str,
    behavior: QueryPathBehavior,
    parameter: &str,
) -> Result<Url, NavigationError> {
    let page_url = page_url.ok_or(NavigationError::MissingPageUrl)?;
    let mut url = parse_url(page_url)?;

    match behavior {
        QueryPathBehavior::UrlFragment => {
            url.set_fragment(Some(&encode_uri_component(text)));
        }
        QueryPathBehavior::QueryParameter => {
            url.query_pairs_mut().append_pair(parameter, text);
        }
    }

    Ok(url)
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod navigation_tests;
