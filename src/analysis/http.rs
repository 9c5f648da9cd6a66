//! HTTP transport for the analysis service

use std::time::Duration;

use super::client::{AnalysisClient, AnalysisError, AnalysisRequest, AnalysisResult};
use crate::config::AnalysisConfig;

/// JSON-over-HTTP analysis client
///
/// Owns a single-threaded tokio runtime so the blocking [`AnalysisClient`]
/// contract can drive the async reqwest client from the worker thread.
#[derive(Debug)]
pub struct HttpAnalysisClient {
    endpoint: String,
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

impl HttpAnalysisClient {
    pub fn new(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let endpoint = config.endpoint.trim();
        if endpoint.is_empty() {
            return Err(AnalysisError::Unavailable(
                "Missing or empty endpoint in [analysis] config".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalysisError::Unavailable(e.to_string()))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AnalysisError::Unavailable(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
            runtime,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        if !status.is_success() {
            let fallback = status.canonical_reason().unwrap_or("Request failed");
            return Err(AnalysisError::Status {
                code: status.as_u16(),
                message: error_message_from_body(&body).unwrap_or_else(|| fallback.to_string()),
            });
        }

        parse_result(&body)
    }
}

impl AnalysisClient for HttpAnalysisClient {
    fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        self.runtime.block_on(self.post(request))
    }
}

/// Decode a success body
pub(crate) fn parse_result(body: &str) -> Result<AnalysisResult, AnalysisError> {
    serde_json::from_str(body).map_err(|e| AnalysisError::Decode(e.to_string()))
}

/// Pull a readable message out of an error body.
///
/// Prefers an `error` or `message` string field of a JSON object, then the
/// raw body text. Blank bodies yield None.
pub(crate) fn error_message_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for key in ["error", "message", "detail"] {
            if let Some(message) = json.get(key).and_then(|v| v.as_str())
                && !message.trim().is_empty()
            {
                return Some(message.trim().to_string());
            }
        }
    }

    Some(trimmed.to_string())
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
