//! Request/response contract with the analysis service

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wizard::Gender;

/// Errors surfaced by an analysis call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("Analysis service error ({code}): {message}")]
    Status { code: u16, message: String },

    /// The service answered 2xx with a body we could not read
    #[error("Invalid response from analysis service: {0}")]
    Decode(String),

    /// No client could be constructed
    #[error("Analysis unavailable: {0}")]
    Unavailable(String),
}

/// Payload sent for analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub symptoms: Vec<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
}

/// Analysis returned by the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Conventionally "low", "medium" or "high"
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub advice: String,
    #[serde(default)]
    pub top_condition: Option<String>,
    #[serde(default)]
    pub condition_details: Option<String>,
    #[serde(default)]
    pub treatment: Option<String>,
}

/// Anything that can turn a request into an analysis
///
/// Implementations block until the call settles; the worker thread keeps
/// that off the UI thread.
pub trait AnalysisClient: Send {
    fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}
