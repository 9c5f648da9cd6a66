//! Wizard transitions and guards

use std::time::{Duration, Instant};

use super::demographics::Gender;
use super::state::{Step, WizardState};
use crate::analysis::{AnalysisClient, AnalysisJob, AnalysisOutcome, AnalysisRequest};
use crate::overlay::DEFAULT_BLUR_CLOSE_DELAY;
use crate::symptoms::{Vocabulary, reconcile, suggest};

/// Shown when Enter or comma commits nothing
pub const NO_RESULTS: &str = "No results";

/// Shown when leaving the first step without a valid symptom
pub const PICK_FROM_AVAILABLE: &str =
    "Please pick from available symptoms. No results were found for your input.";

/// Upper bound accepted while typing an age
const MAX_AGE: u32 = 150;

/// Drives [`WizardState`] through its steps
///
/// Submissions are numbered; only the outcome matching the number in flight
/// is applied, so answers that arrive after a restart are dropped.
#[derive(Debug)]
pub struct Wizard {
    state: WizardState,
    vocabulary: Vocabulary,
    blur_close_delay: Duration,
    last_request_id: u64,
    in_flight: Option<u64>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(Vocabulary::default(), DEFAULT_BLUR_CLOSE_DELAY)
    }
}

impl Wizard {
    pub fn new(vocabulary: Vocabulary, blur_close_delay: Duration) -> Self {
        Self {
            state: WizardState::default(),
            vocabulary,
            blur_close_delay,
            last_request_id: 0,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    // =====================================================================
    // Step 1: symptom entry
    // =====================================================================

    /// Replace the pending text and refresh the overlay
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.state.step != Step::Collecting {
            return;
        }

        self.state.input = text.into();
        self.state.error = None;

        if self.state.input.trim().is_empty() {
            self.state.overlay.reset();
        } else {
            let suggestions = suggest(&self.state.input, &self.state.selection, &self.vocabulary);
            self.state.overlay.open_with(suggestions);
        }
    }

    pub fn push_char(&mut self, ch: char) {
        let mut text = self.state.input.clone();
        text.push(ch);
        self.set_input(text);
    }

    pub fn pop_char(&mut self) {
        let mut text = self.state.input.clone();
        if text.pop().is_some() {
            self.set_input(text);
        }
    }

    /// ArrowDown in the symptom input
    pub fn arrow_down(&mut self) {
        if self.state.step == Step::Collecting {
            self.state.overlay.navigate_next();
        }
    }

    /// ArrowUp in the symptom input
    pub fn arrow_up(&mut self) {
        if self.state.step == Step::Collecting {
            self.state.overlay.navigate_previous();
        }
    }

    /// Escape in the symptom input: hide suggestions, keep the text
    pub fn escape(&mut self) {
        self.state.overlay.close();
    }

    /// Enter or comma in the symptom input.
    ///
    /// Commits the highlighted suggestion if there is one, otherwise every
    /// comma-separated segment that names a symptom exactly. Returns true if
    /// anything was added.
    pub fn commit(&mut self) -> bool {
        if self.state.step != Step::Collecting {
            return false;
        }

        if let Some(active) = self.state.overlay.active_suggestion() {
            let active = active.to_string();
            self.state.selection.add(&active);
            self.clear_entry();
            return true;
        }

        let outcome = reconcile(&self.state.input, &self.state.selection, &self.vocabulary);
        if !outcome.ok() {
            self.state.error = Some(NO_RESULTS.to_string());
            self.state.overlay.open_with(Vec::new());
            return false;
        }

        for symptom in &outcome.added {
            self.state.selection.add(symptom);
        }
        self.clear_entry();
        true
    }

    /// Pointer selection of the suggestion at `index`
    pub fn commit_at(&mut self, index: usize) -> bool {
        if self.state.step != Step::Collecting || !self.state.overlay.is_visible() {
            return false;
        }

        let Some(symptom) = self.state.overlay.suggestion_at(index).map(str::to_string) else {
            return false;
        };
        self.state.selection.add(&symptom);
        self.clear_entry();
        true
    }

    /// Remove a chosen symptom by position
    pub fn remove_symptom(&mut self, index: usize) -> Option<String> {
        if self.state.step != Step::Collecting {
            return None;
        }
        let removed = self.state.selection.remove(index);
        if removed.is_some() {
            self.refresh_suggestions();
        }
        removed
    }

    /// Remove the most recently chosen symptom
    pub fn remove_last_symptom(&mut self) -> Option<String> {
        match self.state.selection.len() {
            0 => None,
            len => self.remove_symptom(len - 1),
        }
    }

    /// The symptom input lost focus
    pub fn blur(&mut self, now: Instant) {
        self.state.overlay.blur(now, self.blur_close_delay);
    }

    /// The symptom input regained focus
    pub fn focus(&mut self) {
        self.state.overlay.focus();
    }

    /// Advance timers. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.state.overlay.poll(now)
    }

    fn clear_entry(&mut self) {
        self.state.input.clear();
        self.state.overlay.reset();
        self.state.error = None;
    }

    /// A removal may make an entry suggestible again
    fn refresh_suggestions(&mut self) {
        if self.state.overlay.is_visible() && !self.state.input.trim().is_empty() {
            let suggestions = suggest(&self.state.input, &self.state.selection, &self.vocabulary);
            self.state.overlay.open_with(suggestions);
        }
    }

    // =====================================================================
    // Step 2: demographics
    // =====================================================================

    pub fn set_age(&mut self, age: Option<u32>) {
        self.state.age = age;
    }

    /// Append a typed digit to the age; non-digits and overflow are ignored
    pub fn push_age_digit(&mut self, ch: char) {
        let Some(digit) = ch.to_digit(10) else {
            return;
        };
        let current = self.state.age.unwrap_or(0);
        let Some(age) = current.checked_mul(10).and_then(|a| a.checked_add(digit)) else {
            return;
        };
        if age <= MAX_AGE {
            self.state.age = Some(age);
        }
    }

    /// Delete the last typed digit; deleting the only digit clears the age
    pub fn pop_age_digit(&mut self) {
        self.state.age = match self.state.age {
            Some(age) if age >= 10 => Some(age / 10),
            _ => None,
        };
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.state.gender = gender;
    }

    // =====================================================================
    // Transitions
    // =====================================================================

    /// Move forward one step, applying that step's guard.
    ///
    /// Review only moves forward through [`Wizard::begin_submission`].
    pub fn next(&mut self) -> bool {
        match self.state.step {
            Step::Collecting => self.leave_collecting(),
            Step::Demographics => {
                self.state.error = None;
                self.state.step = Step::Review;
                true
            }
            Step::Review | Step::Results => false,
        }
    }

    fn leave_collecting(&mut self) -> bool {
        if !self.state.input.trim().is_empty() {
            let outcome = reconcile(&self.state.input, &self.state.selection, &self.vocabulary);
            if !outcome.ok() {
                self.state.error = Some(PICK_FROM_AVAILABLE.to_string());
                return false;
            }
            for symptom in &outcome.added {
                self.state.selection.add(symptom);
            }
        }

        if self.state.selection.is_empty() {
            self.state.error = Some(PICK_FROM_AVAILABLE.to_string());
            return false;
        }

        self.clear_entry();
        self.state.step = Step::Demographics;
        true
    }

    /// Move back one step. Refused while a submission is outstanding.
    pub fn back(&mut self) -> bool {
        if self.state.loading {
            return false;
        }

        let previous = match self.state.step {
            Step::Demographics => Step::Collecting,
            Step::Review => Step::Demographics,
            Step::Collecting | Step::Results => return false,
        };
        self.state.error = None;
        self.state.step = previous;
        true
    }

    /// Start submitting from Review.
    ///
    /// Returns the job to hand to a client, or None when not on Review or a
    /// submission is already outstanding.
    pub fn begin_submission(&mut self) -> Option<AnalysisJob> {
        if self.state.step != Step::Review || self.state.loading {
            return None;
        }

        self.last_request_id = self.last_request_id.wrapping_add(1);
        self.in_flight = Some(self.last_request_id);
        self.state.loading = true;
        self.state.error = None;

        Some(AnalysisJob {
            request_id: self.last_request_id,
            request: AnalysisRequest {
                symptoms: self.state.selection.to_vec(),
                age: self.state.age,
                gender: self.state.gender.for_request(),
            },
        })
    }

    /// Apply the outcome of a submission.
    ///
    /// Outcomes for anything other than the outstanding submission are
    /// ignored. Returns true if the outcome was applied.
    pub fn settle(&mut self, outcome: AnalysisOutcome) -> bool {
        if self.in_flight != Some(outcome.request_id) {
            log::debug!(
                "Ignoring stale analysis outcome {} (in flight: {:?})",
                outcome.request_id,
                self.in_flight
            );
            return false;
        }

        self.in_flight = None;
        self.state.loading = false;

        match outcome.result {
            Ok(result) => {
                self.state.result = Some(result);
                self.state.step = Step::Results;
            }
            Err(message) => {
                self.state.error = Some(message);
            }
        }
        true
    }

    /// Fail the outstanding submission, if any, with `message`.
    ///
    /// Used when no outcome can arrive any more. Returns true if a
    /// submission was failed.
    pub fn abandon_in_flight(&mut self, message: impl Into<String>) -> bool {
        let Some(request_id) = self.in_flight else {
            return false;
        };
        self.settle(AnalysisOutcome {
            request_id,
            result: Err(message.into()),
        })
    }

    /// Submit and settle in one call, blocking on `client`
    pub fn submit_with(&mut self, client: &dyn AnalysisClient) -> bool {
        let Some(job) = self.begin_submission() else {
            return false;
        };
        let result = client.submit(&job.request).map_err(|e| e.to_string());
        self.settle(AnalysisOutcome {
            request_id: job.request_id,
            result,
        })
    }

    /// Forget everything and return to the first step
    pub fn restart(&mut self) {
        if let Some(request_id) = self.in_flight.take() {
            log::debug!("Restart abandons analysis request {}", request_id);
        }
        self.state = WizardState::default();
    }
}

#[cfg(test)]
#[path = "machine_tests.rs"]
mod machine_tests;
