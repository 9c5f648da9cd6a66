use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Instant;

use ratatui::layout::Rect;

use crate::analysis::{AnalysisJob, AnalysisOutcome};
use crate::wizard::Wizard;

/// Error shown when a submission cannot reach the analysis worker
const WORKER_STOPPED: &str = "Analysis worker is not running";

/// Where keyboard input goes on the symptom step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SymptomInput,
    /// The user clicked away from the input
    Elsewhere,
}

/// Field being edited on the demographics step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DemographicsField {
    #[default]
    Age,
    Gender,
}

impl DemographicsField {
    pub fn toggle(self) -> Self {
        match self {
            DemographicsField::Age => DemographicsField::Gender,
            DemographicsField::Gender => DemographicsField::Age,
        }
    }
}

/// Screen regions recorded during the last render, for mouse hit-testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub input: Option<Rect>,
    pub overlay: Option<Rect>,
}

/// Application state
pub struct App {
    pub wizard: Wizard,
    pub focus: Focus,
    pub demographics_field: DemographicsField,
    pub should_quit: bool,
    pub hit_areas: HitAreas,
    /// Channel to send jobs to the analysis worker
    job_tx: Option<Sender<AnalysisJob>>,
    /// Channel to receive outcomes from the analysis worker
    outcome_rx: Option<Receiver<AnalysisOutcome>>,
}

impl App {
    pub fn new(wizard: Wizard) -> Self {
        Self {
            wizard,
            focus: Focus::SymptomInput,
            demographics_field: DemographicsField::default(),
            should_quit: false,
            hit_areas: HitAreas::default(),
            job_tx: None,
            outcome_rx: None,
        }
    }

    /// Attach the analysis worker channels
    pub fn set_channels(
        &mut self,
        job_tx: Sender<AnalysisJob>,
        outcome_rx: Receiver<AnalysisOutcome>,
    ) {
        self.job_tx = Some(job_tx);
        self.outcome_rx = Some(outcome_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Hand the current selection to the analysis worker.
    ///
    /// Without a running worker the submission fails straight away so the
    /// wizard never stays in the loading state.
    pub fn submit(&mut self) {
        let Some(job) = self.wizard.begin_submission() else {
            return;
        };
        let request_id = job.request_id;

        let sent = self
            .job_tx
            .as_ref()
            .is_some_and(|tx| tx.send(job).is_ok());

        if !sent {
            log::warn!("Analysis worker unavailable for request {}", request_id);
            self.wizard.settle(AnalysisOutcome {
                request_id,
                result: Err(WORKER_STOPPED.to_string()),
            });
        }
    }

    /// Apply worker outcomes and timers. Returns true if a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.poll_outcomes();
        changed |= self.wizard.tick(now);
        changed
    }

    fn poll_outcomes(&mut self) -> bool {
        let Some(rx) = &self.outcome_rx else {
            return false;
        };

        let mut outcomes = Vec::new();
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(outcome) => outcomes.push(outcome),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let mut changed = false;
        for outcome in outcomes {
            changed |= self.wizard.settle(outcome);
        }

        if disconnected {
            log::warn!("Analysis worker disconnected");
            // Later submissions fail in `submit` instead of waiting forever
            self.job_tx = None;
            self.outcome_rx = None;
            changed |= self.wizard.abandon_in_flight(WORKER_STOPPED);
        }
        changed
    }

    /// Restart the wizard and the per-step UI state
    pub fn restart(&mut self) {
        self.wizard.restart();
        self.focus = Focus::SymptomInput;
        self.demographics_field = DemographicsField::default();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
