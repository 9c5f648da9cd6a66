//! Remote symptom analysis
//!
//! The wizard only sees the [`AnalysisClient`] trait. The HTTP transport and
//! the background worker that drives it live here.

mod client;
mod http;
mod worker;

pub use client::{AnalysisClient, AnalysisError, AnalysisRequest, AnalysisResult};
pub use http::HttpAnalysisClient;
pub use worker::{AnalysisJob, AnalysisOutcome, spawn_worker};
