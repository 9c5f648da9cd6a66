//! Analysis worker thread
//!
//! Runs analysis calls in a background thread so the UI keeps redrawing
//! while a submission is outstanding. Every job carries the request id the
//! wizard issued; the outcome echoes it back so the wizard can drop answers
//! it no longer waits for.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;

use super::client::{AnalysisClient, AnalysisError, AnalysisRequest, AnalysisResult};

/// A submission handed to the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisJob {
    pub request_id: u64,
    pub request: AnalysisRequest,
}

/// The settled result of one job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub request_id: u64,
    /// Failures are flattened to the message shown to the user
    pub result: Result<AnalysisResult, String>,
}

/// Spawn the analysis worker thread
///
/// The thread serves jobs until `job_rx` is closed. If the client could not
/// be built, every job is answered with that error.
pub fn spawn_worker(
    client: Result<Box<dyn AnalysisClient>, AnalysisError>,
    job_rx: Receiver<AnalysisJob>,
    outcome_tx: Sender<AnalysisOutcome>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        worker_loop(client, job_rx, outcome_tx);
    })
}

fn worker_loop(
    client: Result<Box<dyn AnalysisClient>, AnalysisError>,
    job_rx: Receiver<AnalysisJob>,
    outcome_tx: Sender<AnalysisOutcome>,
) {
    if let Err(e) = &client {
        log::warn!("Analysis client not available: {}", e);
    }

    while let Ok(job) = job_rx.recv() {
        let result = match &client {
            Ok(client) => run_job(client.as_ref(), job.request_id, &job.request),
            Err(e) => Err(e.to_string()),
        };

        if outcome_tx
            .send(AnalysisOutcome {
                request_id: job.request_id,
                result,
            })
            .is_err()
        {
            // UI side is gone, nobody to report to
            break;
        }
    }

    log::debug!("Analysis worker thread shutting down");
}

fn run_job(
    client: &dyn AnalysisClient,
    request_id: u64,
    request: &AnalysisRequest,
) -> Result<AnalysisResult, String> {
    log::info!(
        "Submitting request {} with {} symptoms",
        request_id,
        request.symptoms.len()
    );

    client.submit(request).map_err(|e| {
        log::warn!("Request {} failed: {}", request_id, e);
        e.to_string()
    })
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
