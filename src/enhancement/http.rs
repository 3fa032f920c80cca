//! HTTP client for the query enhancement service
//!
//! POSTs `{"query": ..., "isStaging": ...}` as JSON and expects an
//! [`EnhancedQuery`] body back.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Client;

use super::{EnhancedQuery, EnhancementError, QueryEnhancer};
use crate::config::EnhancementConfig;

/// Enhancement service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpEnhancer {
    client: Client,
    endpoint: String,
}

impl HttpEnhancer {
    /// Create a client for the given endpoint
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, EnhancementError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EnhancementError::NotConfigured(e.to_string()))?;
        Ok(Self { client, endpoint })
    }

    /// Use a caller-built client, e.g. one sharing a connection pool
    pub fn with_client(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    /// Create a client from the `[enhancement]` config section
    pub fn from_config(config: &EnhancementConfig) -> Result<Self, EnhancementError> {
        let endpoint = config
            .endpoint
            .as_ref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| {
                EnhancementError::NotConfigured(
                    "Missing or empty endpoint in [enhancement] config".to_string(),
                )
            })?;
        Self::new(endpoint.clone(), Duration::from_millis(config.timeout_ms))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Serialize the request body
    pub fn build_request_body(&self, text: &str, is_staging: bool) -> serde_json::Value {
        serde_json::json!({
            "query": text,
            "isStaging": is_staging,
        })
    }

    async fn send(&self, text: &str, is_staging: bool) -> Result<EnhancedQuery, EnhancementError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.build_request_body(text, is_staging))
            .send()
            .await
            .map_err(|e| EnhancementError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(EnhancementError::Api {
                code: status.as_u16(),
                message,
            });
        }

        response
            .json::<EnhancedQuery>()
            .await
            .map_err(|e| EnhancementError::Parse(e.to_string()))
    }
}

impl QueryEnhancer for HttpEnhancer {
    fn enhance<'a>(
        &'a self,
        text: &'a str,
        is_staging: bool,
    ) -> BoxFuture<'a, Result<EnhancedQuery, EnhancementError>> {
        self.send(text, is_staging).boxed()
    }
}
