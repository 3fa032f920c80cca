//! Optional query enhancement
//!
//! An enhancement service rewrites a raw query (spelling, synonyms, extracted
//! entities). It is best-effort: any failure falls back to the raw text and is
//! never shown to the user.

mod http;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use http::HttpEnhancer;

/// Errors that can occur while enhancing a query
#[derive(Debug, Error)]
pub enum EnhancementError {
    /// Enhancement service is not configured
    #[error("Enhancement not configured: {0}")]
    NotConfigured(String),

    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// Service returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse the service response
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Full enhancement payload, kept for diagnostic display
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedQuery {
    pub enhanced_query: String,
    #[serde(default)]
    pub entities: Vec<serde_json::Value>,
}

/// A service that rewrites raw queries
pub trait QueryEnhancer: Send + Sync {
    fn enhance<'a>(
        &'a self,
        text: &'a str,
        is_staging: bool,
    ) -> BoxFuture<'a, Result<EnhancedQuery, EnhancementError>>;
}

/// Text to use as the enhanced query
///
/// Failures degrade to the raw text; the payload is only returned on success.
pub fn enhanced_or_raw(
    text: &str,
    result: Result<EnhancedQuery, EnhancementError>,
) -> (String, Option<EnhancedQuery>) {
    match result {
        Ok(enhanced) => (enhanced.enhanced_query.clone(), Some(enhanced)),
        Err(e) => {
            log::warn!("Query enhancement failed, using raw query: {}", e);
            (text.to_string(), None)
        }
    }
}
